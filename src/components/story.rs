use yew::prelude::*;

use crate::components::animated_title::AnimatedTitle;
use crate::components::bento::pointer_in;
use crate::components::button::Button;
use crate::components::particles::{FieldKind, ParticleField};

const MAX_TILT_DEG: f64 = 10.0;

const PARTICLE_PALETTE: &[&str] = &["rgba(167, 139, 250, 0.25)"];
const GLOW_PALETTE: &[&str] = &[
    "rgba(147, 51, 234, 0.08)",
    "rgba(59, 130, 246, 0.06)",
    "rgba(236, 72, 153, 0.07)",
    "rgba(168, 85, 247, 0.05)",
];

/// (rotateX, rotateY) in degrees for a pointer at (x, y) inside a w×h frame.
/// Corners reach ±10deg, the centre is flat.
pub fn frame_tilt(x: f64, y: f64, width: f64, height: f64) -> (f64, f64) {
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }
    let (cx, cy) = (width / 2.0, height / 2.0);
    let rotate_x = ((y - cy) / cy).clamp(-1.0, 1.0) * -MAX_TILT_DEG;
    let rotate_y = ((x - cx) / cx).clamp(-1.0, 1.0) * MAX_TILT_DEG;
    (rotate_x, rotate_y)
}

#[function_component(Story)]
pub fn story() -> Html {
    let frame = use_node_ref();
    let tilt = use_state_eq(|| (0.0_f64, 0.0_f64));

    let onmousemove = {
        let frame = frame.clone();
        let tilt = tilt.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some((x, y, width, height)) = pointer_in(&frame, &e) {
                tilt.set(frame_tilt(x, y, width, height));
            }
        })
    };

    let reset = {
        let tilt = tilt.clone();
        Callback::from(move |_: MouseEvent| tilt.set((0.0, 0.0)))
    };

    let (rotate_x, rotate_y) = *tilt;

    html! {
        <div id="story" class="story-section">
            <div class="section-background">
                <ParticleField
                    class="story-particle"
                    seed={71}
                    count={30}
                    palette={PARTICLE_PALETTE}
                    size={(4.0, 4.0)}
                    max_delay={15.0}
                />
                <ParticleField
                    class="story-glow"
                    kind={FieldKind::Glows}
                    seed={72}
                    count={10}
                    palette={GLOW_PALETTE}
                    size={(384.0, 384.0)}
                />
                <div class="star-field" />
            </div>

            <div class="story-body">
                <p class="eyebrow">{"the multiversal ip world"}</p>

                <div class="story-stage">
                    <AnimatedTitle title="the st<b>o</b>ry of <br /> a hidden real<b>m</b>" class="story-title" />

                    <div class="story-img-container">
                        <div class="story-img-mask">
                            <div class="story-img-content">
                                <img
                                    ref={frame}
                                    src="img/entrance.webp"
                                    alt="entrance"
                                    style={format!(
                                        "transform: perspective(500px) rotateX({:.2}deg) rotateY({:.2}deg);",
                                        rotate_x, rotate_y
                                    )}
                                    {onmousemove}
                                    onmouseleave={reset.clone()}
                                    onmouseup={reset.clone()}
                                    onmouseenter={reset}
                                />
                            </div>
                        </div>
                    </div>
                </div>

                <div class="story-aside">
                    <p>
                        {"Where realms converge, lies NeuralForge and the boundless pillar. Discover its secrets and shape your fate amidst infinite opportunities."}
                    </p>
                    <a href="#prologue">
                        <Button id="realm-btn" title="discover prologue" class="story-button" />
                    </a>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centre_is_flat() {
        assert_eq!(frame_tilt(100.0, 50.0, 200.0, 100.0), (0.0, 0.0));
    }

    #[test]
    fn corners_reach_the_limit() {
        assert_eq!(frame_tilt(0.0, 0.0, 200.0, 100.0), (10.0, -10.0));
        assert_eq!(frame_tilt(200.0, 100.0, 200.0, 100.0), (-10.0, 10.0));
    }

    #[test]
    fn pointer_outside_the_frame_is_clamped() {
        assert_eq!(frame_tilt(500.0, -80.0, 200.0, 100.0), (10.0, 10.0));
    }

    #[test]
    fn empty_frame_does_not_tilt() {
        assert_eq!(frame_tilt(10.0, 10.0, 0.0, 0.0), (0.0, 0.0));
    }
}
