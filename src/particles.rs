//! Ambient background animation.
//!
//! Terminal stand-in for the site's gradient orbs and grain overlay: a
//! sparse starfield drifting behind the content, or soft orbs rising from
//! the bottom of the screen.

use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::theme::colors;

/// Background animation modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AmbientMode {
    /// Slowly drifting stars (default)
    #[default]
    Starfield,
    /// Soft orbs rising from below
    Orbs,
    /// Static background
    None,
}

impl AmbientMode {
    /// Cycle to the next mode
    pub fn next(&self) -> Self {
        match self {
            AmbientMode::Starfield => AmbientMode::Orbs,
            AmbientMode::Orbs => AmbientMode::None,
            AmbientMode::None => AmbientMode::Starfield,
        }
    }

    /// Get display name
    pub fn name(&self) -> &'static str {
        match self {
            AmbientMode::Starfield => "Starfield",
            AmbientMode::Orbs => "Orbs",
            AmbientMode::None => "None",
        }
    }
}

/// A single ambient particle
#[derive(Debug, Clone)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub char: char,
    /// Brightness (0.0 - 1.0)
    pub brightness: f32,
    pub fade_rate: f32,
    pub age: u32,
    /// Phase for the twinkle oscillation
    pub twinkle_phase: f32,
}

impl Particle {
    /// Spawn a star anywhere on screen, drifting gently down
    pub fn new_star(width: u16, height: u16) -> Self {
        let mut rng = rand::thread_rng();
        Self {
            x: rng.gen_range(0.0..width.max(1) as f32),
            y: rng.gen_range(0.0..height.max(1) as f32),
            vx: rng.gen_range(-0.015..0.015),
            vy: rng.gen_range(0.01..0.06),
            char: Self::random_star_char(),
            brightness: rng.gen_range(0.2..0.7),
            fade_rate: rng.gen_range(0.001..0.005),
            age: 0,
            twinkle_phase: rng.gen_range(0.0..std::f32::consts::TAU),
        }
    }

    /// Spawn an orb near the bottom, rising
    pub fn new_orb(width: u16, height: u16) -> Self {
        let mut rng = rand::thread_rng();
        let h = height.max(2) as f32;
        Self {
            x: rng.gen_range(0.0..width.max(1) as f32),
            y: rng.gen_range(h * 0.75..h),
            vx: rng.gen_range(-0.03..0.03),
            vy: rng.gen_range(-0.18..-0.06),
            char: Self::random_orb_char(),
            brightness: rng.gen_range(0.3..0.8),
            fade_rate: rng.gen_range(0.004..0.012),
            age: 0,
            twinkle_phase: rng.gen_range(0.0..std::f32::consts::TAU),
        }
    }

    fn random_star_char() -> char {
        let mut rng = rand::thread_rng();
        let chars = ['·', '∙', '˙', '✦', '·', '∙'];
        chars[rng.gen_range(0..chars.len())]
    }

    fn random_orb_char() -> char {
        let mut rng = rand::thread_rng();
        let chars = ['○', '◦', '∘', '°', '•'];
        chars[rng.gen_range(0..chars.len())]
    }

    /// Update position and brightness
    pub fn update(&mut self, mode: AmbientMode) {
        self.age = self.age.wrapping_add(1);
        let twinkle = (self.twinkle_phase + self.age as f32 * 0.08).sin();

        match mode {
            AmbientMode::Starfield => {
                self.x += self.vx;
                self.y += self.vy;
                // Stars shimmer instead of fading linearly
                self.brightness = (self.brightness + twinkle * 0.01 - self.fade_rate)
                    .clamp(0.0, 0.8);
            }
            AmbientMode::Orbs => {
                self.x += self.vx + twinkle * 0.02;
                self.y += self.vy;
                self.brightness -= self.fade_rate;
            }
            AmbientMode::None => {}
        }
    }

    /// Check if the particle is still visible
    pub fn is_alive(&self, max_x: u16, max_y: u16) -> bool {
        self.brightness > 0.05
            && self.x >= 0.0
            && self.x < max_x as f32
            && self.y >= 0.0
            && self.y < max_y as f32
    }

    /// Color for the current mode, scaled by brightness
    pub fn color(&self, mode: AmbientMode) -> Color {
        let base = match mode {
            AmbientMode::Starfield => colors::PARTICLE_STAR,
            AmbientMode::Orbs => colors::PARTICLE_ORB,
            AmbientMode::None => return Color::Reset,
        };
        if let Color::Rgb(r, g, b) = base {
            let factor = self.brightness;
            Color::Rgb(
                (r as f32 * factor) as u8,
                (g as f32 * factor) as u8,
                (b as f32 * factor) as u8,
            )
        } else {
            base
        }
    }
}

/// The ambient system managing all particles
#[derive(Debug, Clone)]
pub struct AmbientSystem {
    particles: Vec<Particle>,
    mode: AmbientMode,
    max_particles: usize,
    frame_count: u64,
}

impl Default for AmbientSystem {
    fn default() -> Self {
        Self::new(AmbientMode::Starfield, 48)
    }
}

impl AmbientSystem {
    pub fn new(mode: AmbientMode, max_particles: usize) -> Self {
        Self {
            particles: Vec::with_capacity(max_particles),
            mode,
            max_particles,
            frame_count: 0,
        }
    }

    pub fn set_mode(&mut self, mode: AmbientMode) {
        if self.mode != mode {
            self.mode = mode;
            self.particles.clear();
        }
    }

    pub fn mode(&self) -> AmbientMode {
        self.mode
    }

    pub fn toggle_mode(&mut self) {
        self.set_mode(self.mode.next());
    }

    /// Update all particles and spawn new ones
    pub fn update(&mut self, width: u16, height: u16) {
        self.frame_count = self.frame_count.wrapping_add(1);

        if self.mode == AmbientMode::None {
            return;
        }

        for particle in &mut self.particles {
            particle.update(self.mode);
        }
        self.particles.retain(|p| p.is_alive(width, height));
        self.spawn(width, height);
    }

    fn spawn(&mut self, width: u16, height: u16) {
        match self.mode {
            AmbientMode::Starfield => {
                if self.frame_count % 6 == 0 && self.particles.len() < self.max_particles {
                    self.particles.push(Particle::new_star(width, height));
                }
            }
            AmbientMode::Orbs => {
                if self.frame_count % 12 == 0 && self.particles.len() < self.max_particles / 2 {
                    self.particles.push(Particle::new_orb(width, height));
                }
            }
            AmbientMode::None => {}
        }
    }

    /// Render the particles into the buffer
    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        if self.mode == AmbientMode::None {
            return;
        }

        for particle in &self.particles {
            let x = particle.x as u16;
            let y = particle.y as u16;
            if x < area.width && y < area.height {
                let pos = (area.x + x, area.y + y);
                buf[pos].set_char(particle.char);
                buf[pos].set_style(Style::default().fg(particle.color(self.mode)));
            }
        }
    }
}

/// Widget wrapper for the ambient system
pub struct AmbientWidget<'a> {
    system: &'a AmbientSystem,
}

impl<'a> AmbientWidget<'a> {
    pub fn new(system: &'a AmbientSystem) -> Self {
        Self { system }
    }
}

impl Widget for AmbientWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.system.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_cycle_visits_every_mode() {
        let mut mode = AmbientMode::Starfield;
        let mut seen = vec![mode];
        for _ in 0..2 {
            mode = mode.next();
            seen.push(mode);
        }
        assert_eq!(mode.next(), AmbientMode::Starfield);
        assert!(seen.contains(&AmbientMode::Orbs));
        assert!(seen.contains(&AmbientMode::None));
    }

    #[test]
    fn switching_modes_clears_particles() {
        let mut system = AmbientSystem::default();
        for _ in 0..60 {
            system.update(80, 24);
        }
        system.set_mode(AmbientMode::Orbs);
        assert!(system.particles.is_empty());
    }

    #[test]
    fn particle_count_stays_bounded() {
        let mut system = AmbientSystem::new(AmbientMode::Starfield, 16);
        for _ in 0..1000 {
            system.update(80, 24);
        }
        assert!(system.particles.len() <= 16);
    }
}
