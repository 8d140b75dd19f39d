use yew::prelude::*;

use crate::hooks::use_reveal;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub bold: bool,
}

pub type Word = Vec<Segment>;

/// Splits title markup into lines of words. Only `<b>…</b>` and `<br />`
/// are recognised; anything else is kept as text.
pub fn parse_title(markup: &str) -> Vec<Vec<Word>> {
    markup
        .split("<br />")
        .flat_map(|chunk| chunk.split("<br/>"))
        .map(|line| line.split_whitespace().map(parse_word).collect::<Vec<_>>())
        .filter(|line| !line.is_empty())
        .collect()
}

fn parse_word(word: &str) -> Word {
    let mut segments = Vec::new();
    let mut rest = word;
    while let Some(open) = rest.find("<b>") {
        if open > 0 {
            segments.push(Segment {
                text: rest[..open].to_string(),
                bold: false,
            });
        }
        let after_open = &rest[open + 3..];
        match after_open.find("</b>") {
            Some(close) => {
                segments.push(Segment {
                    text: after_open[..close].to_string(),
                    bold: true,
                });
                rest = &after_open[close + 4..];
            }
            None => {
                segments.push(Segment {
                    text: after_open.to_string(),
                    bold: true,
                });
                rest = "";
            }
        }
    }
    if !rest.is_empty() {
        segments.push(Segment {
            text: rest.to_string(),
            bold: false,
        });
    }
    segments
}

#[derive(Properties, PartialEq)]
pub struct AnimatedTitleProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(AnimatedTitle)]
pub fn animated_title(props: &AnimatedTitleProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());
    let lines = {
        let title = props.title.clone();
        use_memo(move |_| parse_title(&title), props.title.clone())
    };

    let offsets: Vec<usize> = lines
        .iter()
        .scan(0, |count, line| {
            let start = *count;
            *count += line.len();
            Some(start)
        })
        .collect();

    html! {
        <div ref={node} class={classes!("animated-title", props.class.clone(), revealed.then_some("revealed"))}>
            { for lines.iter().zip(offsets).map(|(line, offset)| html! {
                <div class="animated-title-line">
                    { for line.iter().enumerate().map(|(i, word)| html! {
                        <span
                            class="animated-word"
                            style={format!("transition-delay: {:.2}s;", (offset + i) as f64 * 0.02)}
                        >
                            { for word.iter().map(|segment| if segment.bold {
                                html! { <b>{ segment.text.clone() }</b> }
                            } else {
                                html! { { segment.text.clone() } }
                            }) }
                        </span>
                    }) }
                </div>
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(text: &str) -> Segment {
        Segment { text: text.into(), bold: false }
    }

    fn bold(text: &str) -> Segment {
        Segment { text: text.into(), bold: true }
    }

    #[test]
    fn splits_lines_and_words() {
        let lines = parse_title("Disc<b>o</b>ver the world's <br /> largest shared <b>a</b>dventure");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].len(), 3);
        assert_eq!(lines[0][0], vec![plain("Disc"), bold("o"), plain("ver")]);
        assert_eq!(lines[1][2], vec![bold("a"), plain("dventure")]);
    }

    #[test]
    fn several_bold_runs_in_one_word() {
        let lines = parse_title("M<b>o</b>re co<b>m</b>ing s<b>o</b>on.");
        assert_eq!(lines[0][1], vec![plain("co"), bold("m"), plain("ing")]);
        assert_eq!(lines[0][2], vec![plain("s"), bold("o"), plain("on.")]);
    }

    #[test]
    fn unclosed_bold_runs_to_end_of_word() {
        assert_eq!(parse_word("ab<b>cd"), vec![plain("ab"), bold("cd")]);
    }

    #[test]
    fn blank_lines_are_dropped() {
        assert_eq!(parse_title("<br />one<br/> <br />").len(), 1);
    }
}
