//! Page layouts. Each `{{mount:<id>}}` is filled by a renderer.

pub const INDEX_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{mount:title}}</title>
    <link rel="stylesheet" href="/assets/style.css">
    <link rel="stylesheet" href="/assets/animations.css">
</head>
<body>
    {{mount:navbar}}
    <main>
        <section class="hero" id="home">
            <div class="container hero-grid">
                <div class="hero-text scroll-reveal-left">
                    <h1>{{mount:heroTitle}}</h1>
                    <p class="hero-subtitle">Original Minecraft plugins for better in-game experience.</p>
                    <a class="btn btn-primary ripple" href="#plugins">Browse plugins</a>
                </div>
                <div class="code-preview scroll-reveal-right">
                    <div class="code-header"><span></span><span></span><span></span><em>plugin.yml</em></div>
                    <div class="code-content" id="codeContent">{{mount:codeContent}}</div>
                </div>
            </div>
        </section>
        <section class="plugins" id="plugins">
            <div class="container">
                <h2 class="section-title scroll-reveal">Our Plugins</h2>
                <div class="plugin-stats-bar scroll-reveal">{{mount:pluginStats}}</div>
                {{mount:filterBar}}
                <div class="plugins-grid" id="pluginsGrid">{{mount:pluginsGrid}}</div>
            </div>
        </section>
        <section class="about" id="about">
            <div class="container scroll-reveal">
                <h2 class="section-title">About</h2>
                <p>{{mount:about}}</p>
            </div>
        </section>
        <section class="contact" id="contact">
            <div class="container scroll-reveal-scale">
                <h2 class="section-title">Contact</h2>
                {{mount:contact}}
            </div>
        </section>
    </main>
    <footer class="footer">{{mount:footer}}</footer>
</body>
</html>
"##;

pub const TERMS_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{mount:title}}</title>
    <link rel="stylesheet" href="/assets/style.css">
    <link rel="stylesheet" href="/assets/animations.css">
</head>
<body>
    {{mount:navbar}}
    <main class="terms-page">
        <div class="container terms-layout">
            <aside class="terms-sidebar">
                <p class="terms-last-updated" id="lastUpdated">{{mount:lastUpdated}}</p>
                {{mount:termsBadge}}
                {{mount:termsNav}}
            </aside>
            <div class="terms-content" id="termsContent">{{mount:termsContent}}</div>
        </div>
    </main>
    <footer class="footer">{{mount:footer}}</footer>
</body>
</html>
"#;
