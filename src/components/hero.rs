use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::button::Button;

const TOTAL_VIDEOS: usize = 4;
const TRANSITION_MS: u32 = 1000;

pub fn video_src(index: usize) -> String {
    format!("videos/hero-{}.mp4", index)
}

/// Videos are numbered 1..=total and wrap around.
pub fn next_video(current: usize, total: usize) -> usize {
    (current % total.max(1)) + 1
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let current = use_state(|| 1usize);
    let transitioning = use_state(|| false);
    let has_clicked = use_state(|| false);

    let on_mini_click = {
        let current = current.clone();
        let transitioning = transitioning.clone();
        let has_clicked = has_clicked.clone();
        Callback::from(move |_: MouseEvent| {
            if *transitioning {
                return;
            }
            log::debug!("Hero advancing from video {}", *current);
            has_clicked.set(true);
            transitioning.set(true);
            current.set(next_video(*current, TOTAL_VIDEOS));

            let transitioning = transitioning.clone();
            Timeout::new(TRANSITION_MS, move || transitioning.set(false)).forget();
        })
    };

    let upcoming = next_video(*current, TOTAL_VIDEOS);

    html! {
        <div id="hero" class="hero">
            <div class="hero-frame">
                <div class="mini-video" onclick={on_mini_click}>
                    <video
                        key={upcoming}
                        src={video_src(upcoming)}
                        loop={true}
                        muted={true}
                        autoplay={true}
                        class="mini-video-preview"
                    />
                </div>
                <video
                    key={*current}
                    src={video_src(*current)}
                    loop={true}
                    muted={true}
                    autoplay={true}
                    class={classes!("hero-video", has_clicked.then_some("grow-in"))}
                />

                <h1 class="special-font hero-heading hero-heading-corner">
                    {"AI "}<b>{"F"}</b>{"orge"}
                </h1>

                <div class="hero-overlay">
                    <h1 class="special-font hero-heading">
                        {"Neur"}<b>{"a"}</b>{"l"}
                    </h1>
                    <p class="hero-subtitle">
                        {"Build the intelligence layer"}<br />
                        {"Train, deploy and trade models"}
                    </p>
                    <Button
                        id="watch-trailer"
                        title="Watch trailer"
                        left_icon="➤"
                        class="hero-trailer"
                    />
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles_through_all_videos() {
        let mut seen = vec![1];
        let mut current = 1;
        for _ in 0..TOTAL_VIDEOS {
            current = next_video(current, TOTAL_VIDEOS);
            seen.push(current);
        }
        assert_eq!(seen, vec![1, 2, 3, 4, 1]);
    }

    #[test]
    fn video_paths() {
        assert_eq!(video_src(3), "videos/hero-3.mp4");
    }
}
