use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldKind {
    /// Small drifting dots.
    Dots,
    /// Large blurred radial glows.
    Glows,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub left: f64,
    pub top: f64,
    pub size: f64,
    pub delay: f64,
    pub color: &'static str,
}

/// Same seed, same layout: the field must not jump around on re-render.
pub fn scatter(
    seed: u64,
    count: usize,
    palette: &[&'static str],
    size: (f64, f64),
    max_delay: f64,
) -> Vec<Particle> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..count)
        .map(|i| Particle {
            left: rng.gen_range(0.0..100.0),
            top: rng.gen_range(0.0..100.0),
            size: if size.1 > size.0 {
                rng.gen_range(size.0..size.1)
            } else {
                size.0
            },
            delay: rng.gen_range(0.0..max_delay.max(f64::EPSILON)),
            color: palette
                .get(i % palette.len().max(1))
                .copied()
                .unwrap_or("rgba(255, 255, 255, 0.3)"),
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct ParticleFieldProps {
    pub class: &'static str,
    pub seed: u64,
    pub count: usize,
    pub palette: &'static [&'static str],
    #[prop_or(FieldKind::Dots)]
    pub kind: FieldKind,
    #[prop_or((2.0, 2.0))]
    pub size: (f64, f64),
    #[prop_or(8.0)]
    pub max_delay: f64,
}

#[function_component(ParticleField)]
pub fn particle_field(props: &ParticleFieldProps) -> Html {
    let particles = {
        let (seed, count, palette, size, max_delay) =
            (props.seed, props.count, props.palette, props.size, props.max_delay);
        use_memo(
            move |_| scatter(seed, count, palette, size, max_delay),
            (seed, count),
        )
    };

    let kind_class = match props.kind {
        FieldKind::Dots => "particle",
        FieldKind::Glows => "glow",
    };

    html! {
        <div class="particle-field" aria-hidden="true">
            { for particles.iter().enumerate().map(|(i, p)| {
                let background = match props.kind {
                    FieldKind::Dots => p.color.to_string(),
                    FieldKind::Glows => format!("radial-gradient(circle, {}, transparent 70%)", p.color),
                };
                html! {
                    <div
                        key={i}
                        class={classes!(props.class, kind_class)}
                        style={format!(
                            "left: {:.2}%; top: {:.2}%; width: {:.1}px; height: {:.1}px; background: {}; animation-delay: {:.2}s;",
                            p.left, p.top, p.size, p.size, background, p.delay
                        )}
                    />
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PALETTE: &[&str] = &["red", "blue"];

    #[test]
    fn scatter_is_deterministic_per_seed() {
        let a = scatter(7, 12, PALETTE, (1.0, 3.5), 8.0);
        let b = scatter(7, 12, PALETTE, (1.0, 3.5), 8.0);
        assert_eq!(a, b);
        assert_ne!(a, scatter(8, 12, PALETTE, (1.0, 3.5), 8.0));
    }

    #[test]
    fn scatter_stays_in_bounds_and_cycles_palette() {
        let particles = scatter(1, 30, PALETTE, (200.0, 500.0), 6.0);
        assert_eq!(particles.len(), 30);
        for (i, p) in particles.iter().enumerate() {
            assert!((0.0..100.0).contains(&p.left));
            assert!((0.0..100.0).contains(&p.top));
            assert!((200.0..500.0).contains(&p.size));
            assert!((0.0..6.0).contains(&p.delay));
            assert_eq!(p.color, PALETTE[i % 2]);
        }
    }

    #[test]
    fn fixed_size_and_empty_palette() {
        let particles = scatter(3, 4, &[], (2.0, 2.0), 0.0);
        assert!(particles.iter().all(|p| p.size == 2.0));
        assert!(particles.iter().all(|p| p.color == "rgba(255, 255, 255, 0.3)"));
    }
}
