// Neonfolio animation: skill particle drift
//
// Labeled markers wander inside a padded canvas. Every frame each marker gets
// a small random kick, is damped, speed-limited, moved, and bounced off the
// padded walls. The marker under pointer focus stays put until released.

use rand::rngs::StdRng;
use rand::Rng;

use neonfolio_utils::config::ParticleConfig;
use neonfolio_utils::content::SkillMarker;

use super::engine::{AnimationEngine, AnimationFrame, DirtyRegion};
use super::error::{AnimationError, AnimationResult};

pub const MARKER: char = '◆';
pub const FOCUSED_MARKER: char = '◉';

/// Origin of one canvas cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell {
    Blank,
    Label,
    /// Marker of the particle at this index
    Marker(usize),
    Focused,
}

/// Canvas size plus the padding kept free along every edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
    pub padding: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32, padding: f32) -> AnimationResult<Self> {
        if padding < 0.0 || width < padding * 2.0 || height < padding * 2.0 {
            return Err(AnimationError::CanvasTooSmall {
                width,
                height,
                padding,
            });
        }
        Ok(Self {
            width,
            height,
            padding,
        })
    }

    pub fn min_x(&self) -> f32 {
        self.padding
    }

    pub fn max_x(&self) -> f32 {
        self.width - self.padding
    }

    pub fn min_y(&self) -> f32 {
        self.padding
    }

    pub fn max_y(&self) -> f32 {
        self.height - self.padding
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        (self.min_x()..=self.max_x()).contains(&x) && (self.min_y()..=self.max_y()).contains(&y)
    }

    fn clamp(&self, x: f32, y: f32) -> (f32, f32) {
        (
            x.clamp(self.min_x(), self.max_x()),
            y.clamp(self.min_y(), self.max_y()),
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub label: String,
    pub color: String,
}

impl Particle {
    pub fn speed(&self) -> f32 {
        self.vx.hypot(self.vy)
    }
}

pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: Bounds,
    acceleration: f32,
    damping: f32,
    max_speed: f32,
    fps: u32,
    focused: Option<usize>,
    rng: StdRng,
    /// Terminal cells used when rendering frames
    grid: (usize, usize),
}

impl ParticleField {
    /// Scatter one particle per marker uniformly inside the padded box, with
    /// velocity components uniform in [-1, 1).
    pub fn new(
        markers: &[SkillMarker],
        config: &ParticleConfig,
        mut rng: StdRng,
    ) -> AnimationResult<Self> {
        let bounds = Bounds::new(config.width, config.height, config.padding)?;
        let particles = markers
            .iter()
            .map(|marker| Particle {
                x: sample(&mut rng, bounds.min_x(), bounds.max_x()),
                y: sample(&mut rng, bounds.min_y(), bounds.max_y()),
                vx: rng.gen_range(-1.0..1.0),
                vy: rng.gen_range(-1.0..1.0),
                label: marker.name.to_string(),
                color: marker.color.to_string(),
            })
            .collect();
        Ok(Self::assemble(particles, bounds, config, rng))
    }

    /// Build a field from explicit particles. Positions outside the padded box
    /// are pulled back inside.
    pub fn from_particles(
        particles: Vec<Particle>,
        config: &ParticleConfig,
        rng: StdRng,
    ) -> AnimationResult<Self> {
        let bounds = Bounds::new(config.width, config.height, config.padding)?;
        let mut field = Self::assemble(particles, bounds, config, rng);
        field.clamp_all();
        Ok(field)
    }

    fn assemble(
        particles: Vec<Particle>,
        bounds: Bounds,
        config: &ParticleConfig,
        rng: StdRng,
    ) -> Self {
        Self {
            particles,
            bounds,
            acceleration: config.acceleration,
            damping: config.damping,
            max_speed: config.max_speed,
            fps: config.fps,
            focused: None,
            rng,
            grid: (80, 20),
        }
    }

    pub fn with_grid(mut self, cols: usize, rows: usize) -> Self {
        self.grid = (cols.max(1), rows.max(1));
        self
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn grid(&self) -> (usize, usize) {
        self.grid
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Freeze the particle at `index` (pointer entered it)
    pub fn focus(&mut self, index: usize) -> AnimationResult<()> {
        if index >= self.particles.len() {
            return Err(AnimationError::NoSuchParticle {
                index,
                len: self.particles.len(),
            });
        }
        self.focused = Some(index);
        Ok(())
    }

    /// Pointer left: everything drifts again
    pub fn release_focus(&mut self) {
        self.focused = None;
    }

    /// Index of the particle nearest to (x, y) within `radius`, for hover tests
    pub fn particle_at(&self, x: f32, y: f32, radius: f32) -> Option<usize> {
        self.particles
            .iter()
            .enumerate()
            .map(|(i, p)| (i, (p.x - x).hypot(p.y - y)))
            .filter(|(_, distance)| *distance <= radius)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
    }

    /// New canvas size; every particle, focused or not, is pulled back inside.
    pub fn resize(&mut self, width: f32, height: f32) -> AnimationResult<()> {
        self.bounds = Bounds::new(width, height, self.bounds.padding)?;
        self.clamp_all();
        log::debug!("Skill canvas resized to {}x{}", width, height);
        Ok(())
    }

    fn clamp_all(&mut self) {
        let bounds = self.bounds;
        for particle in &mut self.particles {
            let (x, y) = bounds.clamp(particle.x, particle.y);
            particle.x = x;
            particle.y = y;
        }
    }

    /// Advance the simulation by one frame.
    pub fn step(&mut self) {
        let bounds = self.bounds;
        let half_kick = self.acceleration / 2.0;
        for (index, particle) in self.particles.iter_mut().enumerate() {
            if self.focused == Some(index) {
                continue;
            }

            let mut vx = particle.vx + sample(&mut self.rng, -half_kick, half_kick);
            let mut vy = particle.vy + sample(&mut self.rng, -half_kick, half_kick);

            vx *= self.damping;
            vy *= self.damping;

            let speed = vx.hypot(vy);
            if speed > self.max_speed {
                vx = vx / speed * self.max_speed;
                vy = vy / speed * self.max_speed;
            }

            let mut x = particle.x + vx;
            let mut y = particle.y + vy;

            if x < bounds.min_x() || x > bounds.max_x() {
                vx = -vx;
                x = x.clamp(bounds.min_x(), bounds.max_x());
            }
            if y < bounds.min_y() || y > bounds.max_y() {
                vy = -vy;
                y = y.clamp(bounds.min_y(), bounds.max_y());
            }

            particle.x = x;
            particle.y = y;
            particle.vx = vx;
            particle.vy = vy;
        }
    }

    /// Terminal cell (col, row) for every particle, in particle order
    pub fn layout(&self) -> Vec<(usize, usize)> {
        let (cols, rows) = self.grid;
        self.particles
            .iter()
            .map(|p| {
                let col = (p.x / self.bounds.width * cols as f32) as usize;
                let row = (p.y / self.bounds.height * rows as f32) as usize;
                (col.min(cols - 1), row.min(rows - 1))
            })
            .collect()
    }

    /// Character grid of the canvas: a marker glyph followed by the label,
    /// clipped at the right edge. Glyphs are drawn over labels, the focused one
    /// last. Each cell says what put it there so renderers can colour it.
    pub fn cells(&self) -> Vec<Vec<(char, GridCell)>> {
        let (cols, rows) = self.grid;
        let mut cells = vec![vec![(' ', GridCell::Blank); cols]; rows];
        let layout = self.layout();
        for (index, &(col, row)) in layout.iter().enumerate() {
            for (offset, c) in self.particles[index].label.chars().enumerate() {
                match cells[row].get_mut(col + 1 + offset) {
                    Some(cell) => *cell = (c, GridCell::Label),
                    None => break,
                }
            }
        }
        for (index, &(col, row)) in layout.iter().enumerate() {
            cells[row][col] = (MARKER, GridCell::Marker(index));
        }
        if let Some(&(col, row)) = self.focused.and_then(|index| layout.get(index)) {
            cells[row][col] = (FOCUSED_MARKER, GridCell::Focused);
        }
        cells
    }

    /// Plain text rendering of [`cells`](Self::cells), rows joined by `\n`
    pub fn render_grid(&self) -> String {
        self.cells()
            .into_iter()
            .map(|line| line.into_iter().map(|(c, _)| c).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl AnimationEngine for ParticleField {
    fn next_frame(&mut self) -> Option<AnimationFrame> {
        self.step();
        let (cols, rows) = self.grid;
        let region = DirtyRegion {
            x: 0,
            y: 0,
            width: cols,
            height: rows,
        };
        Some(AnimationFrame::new(self.render_grid(), vec![region]))
    }

    fn target_fps(&self) -> u32 {
        self.fps
    }

    fn reset(&mut self) {
        // Re-scatter: the simulation keeps no history, so this is a full restart
        let bounds = self.bounds;
        for particle in &mut self.particles {
            particle.x = sample(&mut self.rng, bounds.min_x(), bounds.max_x());
            particle.y = sample(&mut self.rng, bounds.min_y(), bounds.max_y());
            particle.vx = self.rng.gen_range(-1.0..1.0);
            particle.vy = self.rng.gen_range(-1.0..1.0);
        }
        self.focused = None;
    }
}

/// Uniform sample in [low, high), tolerating an empty range
fn sample(rng: &mut StdRng, low: f32, high: f32) -> f32 {
    if high > low {
        rng.gen_range(low..high)
    } else {
        low
    }
}
