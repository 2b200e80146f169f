use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaywallProps {
    pub open: bool,
    pub on_pay: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(Paywall)]
pub fn paywall(props: &PaywallProps) -> Html {
    if !props.open {
        return html! {};
    }
    let on_pay = {
        let on_pay = props.on_pay.clone();
        Callback::from(move |_: MouseEvent| on_pay.emit(()))
    };
    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    html! {
        <div class="dmc-overlay" role="dialog" aria-modal="true">
            <div class="dmc-dialog">
                <h2>{"Unlock Personal AI & Unlimited Replies"}</h2>
                <p class="dmc-muted">{"Upgrade to personalize your AI and get unlimited replies!"}</p>
                <button class="dmc-button" onclick={on_pay}>{"Pay $9.99/month (Stripe)"}</button>
                <button class="dmc-button secondary" onclick={on_cancel}>{"Cancel"}</button>
            </div>
        </div>
    }
}
