//! Static page handlers

use axum::response::Html;
use axum::Json;

/// GET / - Marketing landing page
///
/// Static copy only; decorative client-side visuals don't belong to
/// this service.
pub async fn landing() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>OnlyEngine.x — AI Content Studio</title>
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            margin: 0;
            background: #0a0a0f;
            color: #e5e5e5;
        }
        main {
            max-width: 720px;
            margin: 0 auto;
            padding: 96px 24px;
        }
        h1 {
            font-size: 3rem;
            margin: 0 0 16px;
            background: linear-gradient(90deg, #22d3ee, #a855f7);
            -webkit-background-clip: text;
            background-clip: text;
            color: transparent;
        }
        p.lead { color: #9ca3af; font-size: 1.15rem; line-height: 1.6; }
        ul { color: #9ca3af; line-height: 1.9; }
        a.cta {
            display: inline-block;
            margin-top: 32px;
            background: #22d3ee;
            color: #0a0a0f;
            padding: 12px 28px;
            border-radius: 8px;
            text-decoration: none;
            font-weight: 600;
        }
    </style>
</head>
<body>
    <main>
        <h1>OnlyEngine.x</h1>
        <p class="lead">
            Generate, schedule, and distribute AI content from one workbench.
            Describe what you want, pick a style, and let the engine handle
            rendering, targeting analysis, and platform distribution.
        </p>
        <ul>
            <li>Prompt-driven image generation with style and quality presets</li>
            <li>Scheduled distribution across your connected platforms</li>
            <li>Audience segment analysis with reach estimates</li>
            <li>A content library that tracks every generation</li>
        </ul>
        <a class="cta" href="/api">Explore the API</a>
    </main>
</body>
</html>
"#,
    )
}

/// GET /api - Service banner
pub async fn api_root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "service": "OnlyEngine.x Web",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "operational",
    }))
}
