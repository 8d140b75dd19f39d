use web_sys::Element;
use yew::prelude::*;

/// Pointer position inside `rect` as fractions of its width and height.
pub fn relative_position(left: f64, top: f64, width: f64, height: f64, x: f64, y: f64) -> (f64, f64) {
    if width <= 0.0 || height <= 0.0 {
        return (0.5, 0.5);
    }
    ((x - left) / width, (y - top) / height)
}

pub fn tilt_transform(relative_x: f64, relative_y: f64) -> String {
    let tilt_x = (relative_y - 0.5) * 5.0;
    let tilt_y = (relative_x - 0.5) * -5.0;
    format!(
        "perspective(700px) rotateX({:.2}deg) rotateY({:.2}deg) scale3d(.95, .95, .95)",
        tilt_x, tilt_y
    )
}

/// Pointer offset from the element's top-left corner, plus the element size.
pub fn pointer_in(node: &NodeRef, e: &MouseEvent) -> Option<(f64, f64, f64, f64)> {
    let rect = node.cast::<Element>()?.get_bounding_client_rect();
    Some((
        e.client_x() as f64 - rect.left(),
        e.client_y() as f64 - rect.top(),
        rect.width(),
        rect.height(),
    ))
}

#[derive(Properties, PartialEq)]
pub struct BentoTiltProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(BentoTilt)]
pub fn bento_tilt(props: &BentoTiltProps) -> Html {
    let node = use_node_ref();
    let transform = use_state(String::new);

    let onmousemove = {
        let node = node.clone();
        let transform = transform.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some((x, y, width, height)) = pointer_in(&node, &e) {
                let (rx, ry) = relative_position(0.0, 0.0, width, height, x, y);
                transform.set(tilt_transform(rx, ry));
            }
        })
    };

    let onmouseleave = {
        let transform = transform.clone();
        Callback::from(move |_| transform.set(String::new()))
    };

    html! {
        <div
            ref={node}
            class={props.class.clone()}
            style={format!("transform: {};", *transform)}
            {onmousemove}
            {onmouseleave}
        >
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BentoCardProps {
    pub src: AttrValue,
    pub title: Html,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub coming_soon: bool,
}

/// Video card; the "coming soon" pill carries a gradient that follows the cursor.
#[function_component(BentoCard)]
pub fn bento_card(props: &BentoCardProps) -> Html {
    let pill = use_node_ref();
    let cursor = use_state(|| (0.0_f64, 0.0_f64));
    let hover_opacity = use_state(|| 0.0_f64);

    let onmousemove = {
        let pill = pill.clone();
        let cursor = cursor.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some((x, y, _, _)) = pointer_in(&pill, &e) {
                cursor.set((x, y));
            }
        })
    };
    let onmouseenter = {
        let hover_opacity = hover_opacity.clone();
        Callback::from(move |_| hover_opacity.set(1.0))
    };
    let onmouseleave = {
        let hover_opacity = hover_opacity.clone();
        Callback::from(move |_| hover_opacity.set(0.0))
    };

    let (cx, cy) = *cursor;

    html! {
        <div class="bento-card">
            <video src={props.src.clone()} loop={true} muted={true} autoplay={true} class="bento-video" />
            <div class="bento-body">
                <div>
                    <h1 class="bento-title special-font">{ props.title.clone() }</h1>
                    {
                        if let Some(description) = &props.description {
                            html! { <p class="bento-description">{ description.clone() }</p> }
                        } else {
                            html! {}
                        }
                    }
                </div>
                {
                    if props.coming_soon {
                        html! {
                            <div
                                ref={pill}
                                class="coming-soon"
                                {onmousemove}
                                {onmouseenter}
                                {onmouseleave}
                            >
                                <div
                                    class="coming-soon-glow"
                                    style={format!(
                                        "opacity: {}; background: radial-gradient(100px circle at {:.0}px {:.0}px, #656fe288, #00000026);",
                                        *hover_opacity, cx, cy
                                    )}
                                />
                                <span class="arrow">{"➤"}</span>
                                <p>{"coming soon"}</p>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centre_has_no_tilt() {
        let centre = tilt_transform(0.5, 0.5);
        assert!(centre.starts_with("perspective(700px) rotateX(0.00deg)"));
        assert!(centre.ends_with("scale3d(.95, .95, .95)"));
    }

    #[test]
    fn corners_tilt_towards_the_pointer() {
        let top_left = tilt_transform(0.0, 0.0);
        assert!(top_left.contains("rotateX(-2.50deg)"));
        assert!(top_left.contains("rotateY(2.50deg)"));

        let bottom_right = tilt_transform(1.0, 1.0);
        assert!(bottom_right.contains("rotateX(2.50deg)"));
        assert!(bottom_right.contains("rotateY(-2.50deg)"));
    }

    #[test]
    fn relative_position_in_rect() {
        assert_eq!(relative_position(100.0, 50.0, 200.0, 100.0, 150.0, 75.0), (0.25, 0.25));
        assert_eq!(relative_position(0.0, 0.0, 0.0, 10.0, 5.0, 5.0), (0.5, 0.5));
    }
}
