// Neonfolio skill canvas renderer
// ParticleField's cell grid, with each marker drawn in its own colour and the
// labels in the theme foreground.

use neonfolio_utils::ThemeContext;

use super::Painter;
use crate::animation::{GridCell, ParticleField};

/// One string per canvas row
pub fn render_canvas(field: &ParticleField, ctx: &ThemeContext) -> Vec<String> {
    let painter = Painter::new(ctx);
    let accent = painter.palette().accent;
    let particles = field.particles();

    field
        .cells()
        .into_iter()
        .map(|line| {
            line.into_iter()
                .map(|(c, origin)| {
                    let glyph = c.to_string();
                    match origin {
                        GridCell::Blank => glyph,
                        GridCell::Label => painter.foreground(&glyph),
                        GridCell::Marker(index) => painter.hex(&particles[index].color, &glyph),
                        GridCell::Focused => painter.bold(accent, &glyph),
                    }
                })
                .collect::<String>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{Particle, FOCUSED_MARKER, MARKER};
    use neonfolio_utils::config::ParticleConfig;
    use neonfolio_utils::Theme;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn field() -> ParticleField {
        let particles = vec![
            Particle {
                x: 100.0,
                y: 100.0,
                vx: 0.0,
                vy: 0.0,
                label: "Rust".to_string(),
                color: "#DEA584".to_string(),
            },
            Particle {
                x: 700.0,
                y: 400.0,
                vx: 0.0,
                vy: 0.0,
                label: "Go".to_string(),
                color: "#00ADD8".to_string(),
            },
        ];
        ParticleField::from_particles(particles, &ParticleConfig::default(), StdRng::seed_from_u64(1))
            .unwrap()
            .with_grid(40, 10)
    }

    #[test]
    fn test_plain_canvas_matches_grid() {
        let field = field();
        let lines = render_canvas(&field, &ThemeContext::plain(Theme::Dark));
        let grid: Vec<String> = field.render_grid().lines().map(str::to_string).collect();
        assert_eq!(lines, grid);
    }

    #[test]
    fn test_focused_marker() {
        let mut field = field();
        field.focus(1).unwrap();
        let lines = render_canvas(&field, &ThemeContext::plain(Theme::Light));
        let text = lines.join("\n");
        assert_eq!(text.matches(FOCUSED_MARKER).count(), 1);
        assert_eq!(text.matches(MARKER).count(), 1);
        assert!(text.contains("◆Rust"));
        assert!(text.contains("◉Go"));
    }

    #[test]
    fn test_colored_canvas_uses_marker_colour() {
        let lines = render_canvas(&field(), &ThemeContext::new(Theme::Dark));
        let text = lines.join("\n");
        // #DEA584
        assert!(text.contains("38;2;222;165;132m◆"));
        assert_eq!(lines.len(), 10);
    }
}
