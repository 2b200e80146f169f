use crate::components::paywall::Paywall;
use crate::components::pill_group::{PillGroup, PillOption};
use crate::controller::{FormController, SubmitOutcome};
use crate::models::{CompletionRequest, Goal, Tone};
use crate::theme::{Variant, PAGE_CSS};
use crate::trial::{LocalStorageTrialStore, TrialState};
use crate::utils::api::HttpCloserApi;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

/// Scroll offset after which the sticky call to action appears.
const STICKY_CTA_OFFSET: f64 = 200.0;

const BENEFITS: [&str; 4] = [
    "Win more deals with less effort",
    "AI adapts to your style and goals",
    "No learning curve, just paste and go",
    "Mobile-first, works anywhere",
];

const STEPS: [(&str, &str); 3] = [
    ("Paste your DM & pick your goal", "Drop in your convo, choose your tone and goal."),
    ("Get your perfect reply", "AI crafts a closing message that fits you and your prospect."),
    ("Upgrade for Personal AI", "Unlock unlimited replies and an AI tuned to how you sell."),
];

const TESTIMONIALS: [(&str, &str); 3] = [
    ("Sarah L.", "I closed $2,000 in sales in 2 days using DM Closer. The AI replies are fire!"),
    ("Mike D.", "I was skeptical, but this tool got me paid instantly. 10/10 recommend."),
    ("Alex P.", "The best tool for closing deals in DMs. It just works."),
];

const FAQS: [(&str, &str); 3] = [
    ("How does DM Closer work?", "Paste your DM convo, pick your goal, and our AI crafts the perfect closing message."),
    ("Is my data private?", "Yes! We never store your conversations."),
    ("What if I don't close a deal?", "We offer a 7-day money-back guarantee if you don't close a deal."),
];

fn controller() -> FormController<LocalStorageTrialStore, HttpCloserApi> {
    FormController::new(LocalStorageTrialStore, HttpCloserApi)
}

fn scroll_to(top: f64) {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, top);
    }
}

fn submit_label(locked: bool, loading: bool) -> Html {
    if locked {
        html! { {"Free try used"} }
    } else if loading {
        html! { <><span class="dmc-spinner"></span>{"Generating..."}</> }
    } else {
        html! { {"Generate Response"} }
    }
}

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    #[prop_or_default]
    pub variant: Variant,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let input = use_state(String::new);
    let output = use_state(String::new);
    let loading = use_state(|| false);
    let tone = use_state(Tone::default);
    let goal = use_state(Goal::default);
    let show_paywall = use_state(|| false);
    let locked = use_state(|| false);
    let show_sticky = use_state(|| false);

    // Restore the trial flag from storage on mount
    {
        let locked = locked.clone();
        use_effect_with_deps(
            move |_| {
                let state = controller().trial_state();
                if state != TrialState::Unused {
                    gloo_console::log!(format!("Restored trial state {:?}", state));
                }
                locked.set(state == TrialState::UsedFree);
                || ()
            },
            (),
        );
    }
    // Sticky call to action once the hero is scrolled away
    {
        let show_sticky = show_sticky.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new(move || {
                        if let Some(win) = web_sys::window() {
                            if let Ok(scroll_y) = win.scroll_y() {
                                show_sticky.set(scroll_y > STICKY_CTA_OFFSET);
                            }
                        }
                    });
                    if window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                        .is_err()
                    {
                        gloo_console::warn!("Could not attach scroll listener");
                    }
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            let _ = win.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    let on_input = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            let target: HtmlTextAreaElement = e.target_unchecked_into();
            input.set(target.value());
        })
    };

    let on_tone = {
        let tone = tone.clone();
        Callback::from(move |value: &'static str| {
            if let Some(selected) = Tone::from_value(value) {
                tone.set(selected);
            }
        })
    };

    let on_goal = {
        let goal = goal.clone();
        Callback::from(move |value: &'static str| {
            if let Some(selected) = Goal::from_value(value) {
                goal.set(selected);
            }
        })
    };

    let on_submit = {
        let input = input.clone();
        let output = output.clone();
        let loading = loading.clone();
        let tone = tone.clone();
        let goal = goal.clone();
        let show_paywall = show_paywall.clone();
        let locked = locked.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *loading {
                return;
            }
            let controller = controller();
            if controller.is_locked() {
                show_paywall.set(true);
                return;
            }
            let request = CompletionRequest {
                input: (*input).clone(),
                tone: *tone,
                goal: *goal,
            };
            loading.set(true);
            output.set(String::new());

            let output = output.clone();
            let loading = loading.clone();
            let show_paywall = show_paywall.clone();
            let locked = locked.clone();
            spawn_local(async move {
                match controller.submit(&request).await {
                    SubmitOutcome::Paywall => show_paywall.set(true),
                    SubmitOutcome::Reply(text) => output.set(text),
                }
                locked.set(controller.is_locked());
                loading.set(false);
            });
        })
    };

    let on_pay = {
        let show_paywall = show_paywall.clone();
        let locked = locked.clone();
        Callback::from(move |_: ()| {
            show_paywall.set(false);
            let controller = controller();
            controller.pay();
            gloo_console::log!("Unlimited replies unlocked");
            locked.set(controller.is_locked());
        })
    };

    let on_cancel = {
        let show_paywall = show_paywall.clone();
        Callback::from(move |_: ()| show_paywall.set(false))
    };

    let open_paywall = {
        let show_paywall = show_paywall.clone();
        Callback::from(move |_: MouseEvent| show_paywall.set(true))
    };

    let tone_options: Vec<PillOption> = Tone::ALL
        .iter()
        .map(|t| PillOption { value: t.value(), label: t.label() })
        .collect();
    let goal_options: Vec<PillOption> = Goal::ALL
        .iter()
        .map(|g| PillOption { value: g.value(), label: g.label() })
        .collect();

    html! {
        <div class={props.variant.class()}>
            <style>{PAGE_CSS}</style>

            if *show_sticky {
                <div class="dmc-sticky">
                    <button class="dmc-button" onclick={Callback::from(|_: MouseEvent| scroll_to(0.0))}>
                        {"Try Free, Paste Your DM"}
                    </button>
                </div>
            }

            <Paywall open={*show_paywall} on_pay={on_pay} on_cancel={on_cancel} />

            <section class="dmc-card dmc-hero">
                <div class="dmc-brand">
                    <span>{"DM Closer"}</span>
                    <span class="dmc-dot"></span>
                </div>
                <h1>{"Close more deals in your DMs"}</h1>
                <p class="dmc-muted">
                    {"Paste your convo and let our AI craft the perfect closing message. Designed for creators, closers, and anyone who wants to win more deals."}
                </p>
                <button class="dmc-button pill" onclick={Callback::from(|_: MouseEvent| scroll_to(500.0))}>
                    {"Try Free"}
                </button>
            </section>

            <section class="dmc-card">
                <h2>{"Try the AI DM Closer"}</h2>
                <form onsubmit={on_submit}>
                    <div class="dmc-card-body" style="display: flex; flex-direction: column; gap: 1.5rem;">
                        <textarea
                            class="dmc-textarea"
                            placeholder="Paste your DM conversation here..."
                            value={(*input).clone()}
                            oninput={on_input}
                            required=true
                            rows="5"
                            disabled={*locked}
                        />
                        <div>
                            <div style="margin-bottom: 0.5rem; font-weight: 600;">{"Tone"}</div>
                            <PillGroup options={tone_options} selected={tone.value()} on_select={on_tone} />
                        </div>
                        <div>
                            <div style="margin-bottom: 0.5rem; font-weight: 600;">{"Goal"}</div>
                            <PillGroup options={goal_options} selected={goal.value()} on_select={on_goal} />
                        </div>
                        <button type="submit" class="dmc-button" disabled={*loading || *locked}>
                            { submit_label(*locked, *loading) }
                        </button>
                    </div>
                </form>
                if !output.is_empty() {
                    <div class="dmc-output">
                        <strong>{"AI Reply:"}</strong>
                        <div>{ (*output).clone() }</div>
                    </div>
                }
            </section>

            <section class="dmc-card">
                <h2>{"Why DM Closer?"}</h2>
                <ul style="list-style: none; padding: 0; display: flex; flex-direction: column; gap: 1rem;">
                    { for BENEFITS.iter().map(|benefit| html! {
                        <li style="display: flex; align-items: center; gap: 0.75rem;">
                            <span class="dmc-dot"></span>
                            <span>{ *benefit }</span>
                        </li>
                    })}
                </ul>
                <button class="dmc-button" onclick={Callback::from(|_: MouseEvent| scroll_to(500.0))}>
                    {"Try Free Now"}
                </button>
            </section>

            <section class="dmc-steps">
                { for STEPS.iter().enumerate().map(|(i, (title, desc))| html! {
                    <div class="dmc-step">
                        <div class="dmc-step-number">{ i + 1 }</div>
                        <div>
                            <div style="font-size: 1.125rem; font-weight: 700;">{ *title }</div>
                            <div class="dmc-muted">{ *desc }</div>
                        </div>
                    </div>
                })}
            </section>

            <section class="dmc-card">
                <h2>{"What people are saying"}</h2>
                <div class="dmc-testimonials">
                    { for TESTIMONIALS.iter().map(|(name, text)| html! {
                        <div class="dmc-testimonial">
                            <p>{ format!("\"{}\"", text) }</p>
                            <span class="dmc-badge">{ *name }</span>
                        </div>
                    })}
                </div>
                <button class="dmc-button pill" onclick={Callback::from(|_: MouseEvent| scroll_to(500.0))}>
                    {"Join 1,000+ closers"}
                </button>
            </section>

            <section class="dmc-card" style="align-items: center;">
                <h2>{"Pricing"}</h2>
                <div class="dmc-price">{"$9.99"}</div>
                <div>{"per month, unlimited AI replies"}</div>
                <button class="dmc-button" onclick={open_paywall}>{"Upgrade Now"}</button>
                <div class="dmc-muted" style="font-size: 0.75rem;">{"7-day money-back guarantee"}</div>
            </section>

            <section class="dmc-card">
                <h2>{"FAQ"}</h2>
                { for FAQS.iter().map(|(question, answer)| html! {
                    <div class="dmc-testimonial">
                        <div style="font-weight: 600;">{ *question }</div>
                        <div class="dmc-muted" style="font-size: 0.875rem;">{ *answer }</div>
                    </div>
                })}
            </section>

            <footer class="dmc-footer">
                <div>{"Omen Studios © DM Closer"}</div>
                <div><a href="mailto:joshomenstudios@gmail.com">{"Support"}</a></div>
            </footer>
        </div>
    }
}
