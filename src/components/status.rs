use yew::prelude::*;

#[function_component(Loading)]
pub fn loading() -> Html {
    html! {
        <div class="status loading">
            <div class="spinner"></div>
            <p>{"読み込み中..."}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: AttrValue,
}

/// Terminal error view; replaces the whole panel until the user reloads.
#[function_component(ErrorDisplay)]
pub fn error_display(props: &ErrorDisplayProps) -> Html {
    html! {
        <div class="status error">
            <p>{"エラー: "}{&props.message}</p>
        </div>
    }
}
