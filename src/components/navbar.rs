use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

const NAV_ITEMS: [(&str, &str); 6] = [
    ("Nexus", "/#nexus"),
    ("Vault", "/#vault"),
    ("Prologue", "/#prologue"),
    ("About", "/#about"),
    ("Story", "/#story"),
    ("Contact", "/#contact"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavVisibility {
    pub visible: bool,
    pub floating: bool,
}

/// At the top the bar is flat and shown; scrolling down hides it and
/// scrolling up brings it back as a floating bar.
pub fn nav_visibility(previous_y: f64, y: f64, current: NavVisibility) -> NavVisibility {
    if y <= 0.0 {
        NavVisibility { visible: true, floating: false }
    } else if y > previous_y {
        NavVisibility { visible: false, floating: true }
    } else if y < previous_y {
        NavVisibility { visible: true, floating: true }
    } else {
        current
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let visibility = use_state_eq(|| NavVisibility { visible: true, floating: false });
    let last_y = use_mut_ref(|| 0.0_f64);
    let (_, scroll_y) = use_window_scroll();

    {
        let visibility = visibility.clone();
        use_effect_with_deps(
            move |scroll_y| {
                let previous = *last_y.borrow();
                visibility.set(nav_visibility(previous, *scroll_y, *visibility));
                *last_y.borrow_mut() = *scroll_y;
                || ()
            },
            scroll_y,
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!(
            "top-nav",
            visibility.floating.then_some("floating-nav"),
            (!visibility.visible).then_some("nav-hidden"),
        )}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    { config::site_name() }
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_ITEMS.iter().map(|(label, href)| html! {
                        <a href={*href} class="nav-link" onclick={close_menu.clone()}>
                            { *label }
                        </a>
                    }) }
                </div>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHOWN: NavVisibility = NavVisibility { visible: true, floating: false };

    #[test]
    fn top_of_page_is_flat() {
        let floating = NavVisibility { visible: false, floating: true };
        assert_eq!(nav_visibility(120.0, 0.0, floating), SHOWN);
    }

    #[test]
    fn hides_scrolling_down_and_returns_scrolling_up() {
        let down = nav_visibility(0.0, 300.0, SHOWN);
        assert_eq!(down, NavVisibility { visible: false, floating: true });
        let up = nav_visibility(300.0, 250.0, down);
        assert_eq!(up, NavVisibility { visible: true, floating: true });
    }

    #[test]
    fn no_movement_keeps_state() {
        let down = NavVisibility { visible: false, floating: true };
        assert_eq!(nav_visibility(300.0, 300.0, down), down);
    }
}
