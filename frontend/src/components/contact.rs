use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::info;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, MouseEvent};
use yew::prelude::*;

use crate::animation::reveal::{reveal_class, stagger_style, use_reveal};
use crate::config::{self, ADDRESS, CONTACT_EMAIL, CONTACT_PHONE};
use crate::forms::{label_active, ContactForm, Field, FormErrors, SubmitStatus};

#[function_component(Contact)]
pub fn contact() -> Html {
    let section_ref = use_node_ref();
    let visible = use_reveal(section_ref.clone(), config::REVEAL_THRESHOLD);
    let form = use_state(ContactForm::default);
    let errors = use_state(FormErrors::default);
    let status = use_state(|| SubmitStatus::Idle);
    let focused = use_state(|| None::<Field>);
    let pending_submit: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);

    // A pending simulated send must not fire after the form is gone.
    {
        let pending_submit = pending_submit.clone();
        use_effect_with_deps(move |_| {
            move || {
                if let Some(timeout) = pending_submit.borrow_mut().take() {
                    drop(timeout);
                }
            }
        }, ());
    }

    let on_edit = |field: Field| {
        let form = form.clone();
        let errors = errors.clone();
        move |value: String| {
            let mut next = (*form).clone();
            next.set(field, value);
            form.set(next);
            if errors.get(field).is_some() {
                let mut cleared = (*errors).clone();
                cleared.clear(field);
                errors.set(cleared);
            }
        }
    };

    let on_submit = {
        let form = form.clone();
        let errors = errors.clone();
        let status = status.clone();
        let pending_submit = pending_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *status == SubmitStatus::Sending {
                return;
            }
            let found = form.validate();
            if !found.is_empty() {
                errors.set(found);
                return;
            }

            info!("Sending contact message");
            status.set(SubmitStatus::Sending);
            let form = form.clone();
            let errors = errors.clone();
            let status = status.clone();
            let timeout = Timeout::new(config::SIMULATED_SUBMIT_MS, move || {
                status.set(SubmitStatus::Success);
                form.set(ContactForm::default());
                errors.set(FormErrors::default());
            });
            *pending_submit.borrow_mut() = Some(timeout);
        })
    };

    let send_another = {
        let status = status.clone();
        Callback::from(move |_: MouseEvent| status.set(SubmitStatus::Idle))
    };

    let field_view = |field: Field| -> Html {
        let has_error = errors.get(field).is_some();
        let label_class = classes!(
            "float-label",
            label_active(*focused, &form, field).then(|| "active")
        );
        let input_class = classes!("form-input", has_error.then(|| "invalid"));
        let placeholder = if *focused == Some(field) { "" } else { field.placeholder() };
        let describedby = has_error.then(|| format!("{}-error", field.id()));
        let onfocus = {
            let focused = focused.clone();
            Callback::from(move |_: FocusEvent| focused.set(Some(field)))
        };
        let onblur = {
            let focused = focused.clone();
            Callback::from(move |_: FocusEvent| focused.set(None))
        };
        let edit = on_edit(field);

        let control = if field == Field::Message {
            let oninput = Callback::from(move |e: InputEvent| {
                let input: HtmlTextAreaElement = e.target_unchecked_into();
                edit(input.value());
            });
            html! {
                <textarea
                    id={field.id()}
                    rows="4"
                    class={input_class}
                    aria-labelledby={format!("label-{}", field.id())}
                    aria-invalid={has_error.to_string()}
                    aria-describedby={describedby}
                    placeholder={placeholder}
                    value={form.value(field).to_string()}
                    {onfocus}
                    {onblur}
                    {oninput}
                />
            }
        } else {
            let oninput = Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                edit(input.value());
            });
            html! {
                <input
                    type={if field == Field::Email { "email" } else { "text" }}
                    id={field.id()}
                    class={input_class}
                    aria-labelledby={format!("label-{}", field.id())}
                    aria-invalid={has_error.to_string()}
                    aria-describedby={describedby}
                    placeholder={placeholder}
                    value={form.value(field).to_string()}
                    {onfocus}
                    {onblur}
                    {oninput}
                />
            }
        };

        html! {
            <div class="form-field">
                <label id={format!("label-{}", field.id())} for={field.id()} class={label_class}>
                    {field.label()}
                </label>
                {control}
                if let Some(message) = errors.get(field) {
                    <p id={format!("{}-error", field.id())} class="field-error">{"⚠ "}{message.to_string()}</p>
                }
            </div>
        }
    };

    let state = reveal_class(visible, "shown", "hidden");
    let details = [
        ("✉️", "Email Us", CONTACT_EMAIL),
        ("📍", "Visit Us", ADDRESS),
        ("📞", "Call Us", CONTACT_PHONE),
    ];

    html! {
        <section ref={section_ref} id="contact" class="contact-section">
            <div class="contact-grid">
                <div class="contact-intro">
                    <div class={classes!("reveal", state)}>
                        <p class="eyebrow">{"Get in Touch"}</p>
                        <h3>{"Let's build something "}<span class="accent">{"extraordinary"}</span>{" together."}</h3>
                    </div>
                    <p class={classes!("contact-lead", "reveal", state)} style="transition-delay: 100ms;">
                        {"Have a project in mind? We'd love to hear from you. Send us a message and we'll get back to you within 24 hours."}
                    </p>
                    <div class="contact-details">
                        { for details.iter().enumerate().map(|(i, (icon, label, value))| html! {
                            <div key={*label} class={classes!("contact-detail", "reveal-side", state)} style={stagger_style(200, 150, i)}>
                                <div class="detail-icon" aria-hidden="true">{*icon}</div>
                                <div>
                                    <p class="detail-label">{*label}</p>
                                    <p class="detail-value">{*value}</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>

                <div class={classes!("contact-card", "reveal", state)} style="transition-delay: 300ms;">
                    if *status == SubmitStatus::Success {
                        <div class="contact-success">
                            <div class="success-icon">{"✓"}</div>
                            <h4>{"Message Sent!"}</h4>
                            <p>{"Thank you for reaching out. We'll be in touch very soon."}</p>
                            <button class="btn btn-outline" onclick={send_another}>{"Send another message"}</button>
                        </div>
                    } else {
                        <form onsubmit={on_submit} class="contact-form" novalidate={true}>
                            <div class="form-row">
                                { field_view(Field::Name) }
                                { field_view(Field::Email) }
                            </div>
                            { field_view(Field::Message) }
                            <button
                                type="submit"
                                class="btn btn-primary btn-block"
                                disabled={*status == SubmitStatus::Sending}
                                aria-label={if *status == SubmitStatus::Sending { "Sending message..." } else { "Send message now" }}
                            >
                                if *status == SubmitStatus::Sending {
                                    <><span class="spinner"></span>{" Sending..."}</>
                                } else {
                                    <>{"Send Message ➤"}</>
                                }
                            </button>
                        </form>
                    }
                </div>
            </div>

            <style>
                {r#"
                .contact-section {
                    padding: 6rem 1.5rem;
                    background: #0f172a;
                    color: #fff;
                    overflow: hidden;
                }
                .contact-grid {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 4rem;
                }
                .contact-intro h3 {
                    font-size: 3rem;
                    line-height: 1.15;
                    margin: 0;
                }
                .contact-intro .accent {
                    color: #3b82f6;
                }
                .contact-lead {
                    color: #cbd5e1;
                    font-size: 1.125rem;
                    max-width: 28rem;
                }
                .contact-details {
                    padding-top: 2rem;
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .contact-detail {
                    display: flex;
                    gap: 1rem;
                    transition: opacity 0.7s ease-out, transform 0.7s ease-out;
                }
                .reveal-side.hidden {
                    opacity: 0;
                    transform: translateX(-1.5rem);
                }
                .detail-icon {
                    padding: 0.75rem;
                    background: #1e293b;
                    border: 1px solid #334155;
                    border-radius: 0.5rem;
                    height: fit-content;
                }
                .detail-label {
                    margin: 0 0 0.25rem;
                    font-size: 0.875rem;
                    color: #94a3b8;
                }
                .detail-value {
                    margin: 0;
                    font-size: 1.1rem;
                    font-weight: 500;
                }
                .contact-card {
                    background: rgba(30, 41, 59, 0.5);
                    border: 1px solid #334155;
                    border-radius: 1.5rem;
                    padding: 2.5rem;
                }
                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                }
                .form-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2rem;
                }
                .form-field {
                    position: relative;
                }
                .float-label {
                    position: absolute;
                    left: 1rem;
                    top: 0.9rem;
                    font-size: 0.6rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    color: #64748b;
                    opacity: 0;
                    pointer-events: none;
                    transition: all 0.3s;
                }
                .float-label.active {
                    top: -0.6rem;
                    padding: 0 0.5rem;
                    background: #0f172a;
                    color: #60a5fa;
                    opacity: 1;
                    z-index: 1;
                }
                .form-input {
                    width: 100%;
                    box-sizing: border-box;
                    background: #0f172a;
                    border: 1px solid #334155;
                    border-radius: 0.5rem;
                    padding: 0.9rem 1rem;
                    color: #fff;
                    resize: none;
                    transition: border-color 0.3s;
                }
                .form-input:focus {
                    outline: none;
                    border-color: #60a5fa;
                }
                .form-input.invalid {
                    border-color: #ef4444;
                }
                .field-error {
                    margin: 0.4rem 0 0;
                    color: #f87171;
                    font-size: 0.6rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                }
                .contact-success {
                    text-align: center;
                    padding: 3rem 0;
                }
                .success-icon {
                    width: 5rem;
                    height: 5rem;
                    margin: 0 auto 1.5rem;
                    border-radius: 50%;
                    background: rgba(59, 130, 246, 0.2);
                    color: #60a5fa;
                    font-size: 2.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .spinner {
                    display: inline-block;
                    width: 1rem;
                    height: 1rem;
                    border: 2px solid rgba(255, 255, 255, 0.2);
                    border-top-color: #fff;
                    border-radius: 50%;
                    animation: spin 1s linear infinite;
                    vertical-align: middle;
                }
                @media (max-width: 1024px) {
                    .contact-grid,
                    .form-row {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
