use yew::prelude::*;

use crate::components::animated_title::AnimatedTitle;
use crate::components::button::Button;
use crate::components::particles::{FieldKind, ParticleField};

const PARTICLE_PALETTE: &[&str] = &["rgba(147, 197, 253, 0.4)"];
const GLOW_PALETTE: &[&str] = &["rgba(59, 130, 246, 0.08)", "rgba(147, 51, 234, 0.08)"];

#[derive(Properties, PartialEq)]
struct ImageClipBoxProps {
    src: AttrValue,
    class: Classes,
}

#[function_component(ImageClipBox)]
fn image_clip_box(props: &ImageClipBoxProps) -> Html {
    html! {
        <div class={props.class.clone()}>
            <img src={props.src.clone()} alt="" />
        </div>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <div id="contact" class="contact-section">
            <div class="section-background">
                <ParticleField
                    class="contact-particle"
                    seed={81}
                    count={15}
                    palette={PARTICLE_PALETTE}
                    size={(4.0, 4.0)}
                    max_delay={10.0}
                />
                <ParticleField
                    class="contact-glow"
                    kind={FieldKind::Glows}
                    seed={82}
                    count={6}
                    palette={GLOW_PALETTE}
                    size={(320.0, 320.0)}
                    max_delay={4.0}
                />
            </div>

            <div class="contact-panel">
                <div class="contact-inner-glow" />
                <div class="contact-clips-left">
                    <ImageClipBox src="img/contact-1.webp" class="contact-clip-path-1" />
                    <ImageClipBox src="img/contact-2.webp" class={classes!("contact-clip-path-2", "contact-clip-lower")} />
                </div>

                <div class="contact-clips-right">
                    <ImageClipBox src="img/swordman-partial.webp" class={classes!("clip-overlay", "clip-scaled")} />
                    <ImageClipBox src="img/swordman.webp" class={classes!("sword-man-clip-path", "clip-scaled")} />
                </div>

                <div class="contact-body">
                    <p class="eyebrow">{"Join NeuralForge"}</p>
                    <AnimatedTitle
                        title="let's b<b>u</b>ild the <br /> new era of <br /> <b>A</b>I t<b>o</b>gether."
                        class={classes!("special-font", "contact-title")}
                    />
                    <a href="mailto:hello@neuralforge.ai">
                        <Button title="contact us" class="contact-button" />
                    </a>
                </div>
            </div>
        </div>
    }
}
