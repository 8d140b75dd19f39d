use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub left_icon: Option<AttrValue>,
    #[prop_or_default]
    pub right_icon: Option<AttrValue>,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let icon = |glyph: &Option<AttrValue>| match glyph {
        Some(glyph) => html! { <span class="button-icon">{ glyph.clone() }</span> },
        None => html! {},
    };

    html! {
        <button
            id={props.id.clone()}
            class={classes!("cta-button", props.class.clone())}
            onclick={props.onclick.clone()}
        >
            { icon(&props.left_icon) }
            <span class="button-label">{ props.title.clone() }</span>
            { icon(&props.right_icon) }
        </button>
    }
}
