use web_sys::Element;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::animated_title::AnimatedTitle;
use crate::components::particles::ParticleField;

/// Scroll distance, in pixels, over which the image grows to full screen.
const CLIP_SCROLL_DISTANCE: f64 = 800.0;

const PARTICLE_PALETTE: &[&str] = &["rgba(96, 165, 250, 0.2)"];

/// 0 while the clip's centre is below the viewport centre, 1 once it has
/// travelled `distance` pixels past it.
pub fn clip_progress(clip_center: f64, viewport_height: f64, distance: f64) -> f64 {
    if distance <= 0.0 {
        return 1.0;
    }
    ((viewport_height / 2.0 - clip_center) / distance).clamp(0.0, 1.0)
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

pub fn clip_style(progress: f64) -> String {
    format!(
        "width: {:.2}vw; height: {:.2}vh; border-radius: {:.1}px;",
        lerp(30.0, 100.0, progress),
        lerp(60.0, 100.0, progress),
        lerp(24.0, 0.0, progress)
    )
}

#[function_component(About)]
pub fn about() -> Html {
    let clip = use_node_ref();
    let progress = use_state_eq(|| 0.0_f64);
    let (_, scroll_y) = use_window_scroll();
    let (_, viewport_height) = use_window_size();

    {
        let clip = clip.clone();
        let progress = progress.clone();
        use_effect_with_deps(
            move |(_, viewport_height)| {
                if let Some(element) = clip.cast::<Element>() {
                    let rect = element.get_bounding_client_rect();
                    let center = rect.top() + rect.height() / 2.0;
                    progress.set(clip_progress(center, *viewport_height, CLIP_SCROLL_DISTANCE));
                }
                || ()
            },
            (scroll_y as i64, viewport_height),
        );
    }

    html! {
        <div id="about" class="about-section">
            <div class="section-background">
                <div class="about-gradient" />
                <ParticleField
                    class="about-particle"
                    seed={11}
                    count={20}
                    palette={PARTICLE_PALETTE}
                />
                <div class="grid-pattern grid-pattern-blue" />
            </div>

            <div class="about-intro">
                <p class="eyebrow">{"Welcome to NeuralForge"}</p>
                <AnimatedTitle
                    title="Disc<b>o</b>ver the world's <br /> largest shared <b>A</b>I f<b>o</b>rge"
                    class="about-title"
                />
                <div class="about-subtext">
                    <p>{"The model of models begins: your ideas, now trained at scale"}</p>
                    <p class="muted">
                        {"NeuralForge unites every builder from countless frameworks and platforms, both research and production, into a unified intelligence economy"}
                    </p>
                </div>
            </div>

            <div class="clip-stage" id="clip" ref={clip}>
                <div class="mask-clip-path about-image" style={clip_style(*progress)}>
                    <img src="img/about.webp" alt="Background" />
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_is_clamped() {
        assert_eq!(clip_progress(900.0, 800.0, 800.0), 0.0);
        assert_eq!(clip_progress(400.0, 800.0, 800.0), 0.0);
        assert_eq!(clip_progress(0.0, 800.0, 800.0), 0.5);
        assert_eq!(clip_progress(-2000.0, 800.0, 800.0), 1.0);
    }

    #[test]
    fn style_interpolates_to_full_screen() {
        assert_eq!(clip_style(0.0), "width: 30.00vw; height: 60.00vh; border-radius: 24.0px;");
        assert_eq!(clip_style(1.0), "width: 100.00vw; height: 100.00vh; border-radius: 0.0px;");
    }
}
