use yew::prelude::*;

use crate::collection::SelectionError;

#[derive(Properties, PartialEq)]
pub struct SectionErrorProps {
    pub section: AttrValue,
    pub message: AttrValue,
}

/// Shown in place of a section whose content could not be loaded.
#[function_component(SectionError)]
pub fn section_error(props: &SectionErrorProps) -> Html {
    html! {
        <div class="section-error">
            <h3>{ format!("The {} section is unavailable", props.section) }</h3>
            <p>{ props.message.clone() }</p>
        </div>
    }
}

pub fn selection_message(err: &SelectionError) -> &'static str {
    match err {
        SelectionError::ItemLocked(_) => "This item is locked and can't be selected yet.",
        SelectionError::UnknownItem(_) => "That item is no longer available.",
    }
}

#[derive(Properties, PartialEq)]
pub struct SelectionNoticeProps {
    pub error: Option<SelectionError>,
    pub on_dismiss: Callback<()>,
}

#[function_component(SelectionNotice)]
pub fn selection_notice(props: &SelectionNoticeProps) -> Html {
    let Some(error) = &props.error else {
        return html! {};
    };

    let on_dismiss = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class="selection-notice" role="status">
            <span class="lock-icon">{"🔒"}</span>
            <span>{ selection_message(error) }</span>
            <button class="notice-dismiss" onclick={on_dismiss}>{"✕"}</button>
        </div>
    }
}
