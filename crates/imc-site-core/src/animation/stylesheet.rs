//! Animation stylesheet written to `assets/animations.css`

pub const ANIMATIONS_CSS_PATH: &str = "assets/animations.css";

const KEYFRAMES: &str = r#"@keyframes ripple {
    to { transform: scale(4); opacity: 0; }
}

@keyframes elastic {
    0% { transform: scale(0); }
    60% { transform: scale(1.1); }
    100% { transform: scale(1); }
}

@keyframes slideInUp {
    0% { opacity: 0; transform: translateY(30px); }
    100% { opacity: 1; transform: translateY(0); }
}

@keyframes slideInLeft {
    0% { opacity: 0; transform: translateX(-30px); }
    100% { opacity: 1; transform: translateX(0); }
}

@keyframes slideInRight {
    0% { opacity: 0; transform: translateX(30px); }
    100% { opacity: 1; transform: translateX(0); }
}

@keyframes zoomIn {
    0% { opacity: 0; transform: scale(0.3); }
    100% { opacity: 1; transform: scale(1); }
}

@keyframes fadeIn {
    0% { opacity: 0; }
    100% { opacity: 1; }
}
"#;

const UTILITIES: &str = r#".animate-slideInUp { animation: slideInUp 0.6s ease-out forwards; }
.animate-slideInLeft { animation: slideInLeft 0.6s ease-out forwards; }
.animate-slideInRight { animation: slideInRight 0.6s ease-out forwards; }
.animate-zoomIn { animation: zoomIn 0.5s ease-out forwards; }
.animate-elastic { animation: elastic 0.6s cubic-bezier(0.68, -0.55, 0.265, 1.55) forwards; }

.plugin-card.animate-in { opacity: 0; animation: slideInUp 0.6s ease-out forwards; }
.hover-lift { transition: transform 0.3s ease-out; }
@media (min-width: 769px) {
    .hover-lift:hover { transform: translateY(-5px); }
}

.ripple { position: relative; overflow: hidden; }
.ripple::after {
    content: "";
    position: absolute;
    inset: 0;
    border-radius: 50%;
    background: rgba(27, 217, 106, 0.3);
    transform: scale(0);
    opacity: 1;
    pointer-events: none;
}
.ripple:active::after { animation: ripple 600ms linear; }

.scroll-reveal { opacity: 0; animation: slideInUp 0.6s ease-out forwards; }
.scroll-reveal-left { opacity: 0; animation: slideInLeft 0.6s ease-out forwards; }
.scroll-reveal-right { opacity: 0; animation: slideInRight 0.6s ease-out forwards; }
.scroll-reveal-scale { opacity: 0; animation: zoomIn 0.5s ease-out forwards; }
.scroll-reveal.revealed, .scroll-reveal-left.revealed,
.scroll-reveal-right.revealed, .scroll-reveal-scale.revealed {
    opacity: 1;
    animation: none;
}

.code-line { opacity: 0; animation: fadeIn 0.3s ease-out forwards; }

@media (prefers-reduced-motion: reduce) {
    .plugin-card.animate-in, .scroll-reveal, .scroll-reveal-left,
    .scroll-reveal-right, .scroll-reveal-scale, .code-line {
        opacity: 1;
        animation: none;
    }
}
"#;

/// Keyframes plus the classes the renderers emit
pub fn animations_css() -> String {
    format!("{}\n{}", KEYFRAMES, UTILITIES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stylesheet_covers_rendered_classes() {
        let css = animations_css();
        for name in ["ripple", "elastic", "slideInUp", "slideInLeft", "slideInRight", "zoomIn"] {
            assert!(css.contains(&format!("@keyframes {}", name)), "{}", name);
        }
        for class in [".animate-in", ".hover-lift", ".scroll-reveal", ".code-line"] {
            assert!(css.contains(class), "{}", class);
        }
    }

    #[test]
    fn test_revealed_shows_scroll_reveal_elements() {
        let css = animations_css();
        assert!(css.contains(".scroll-reveal.revealed"));
        assert!(css.contains(".scroll-reveal-scale.revealed"));
    }
}
