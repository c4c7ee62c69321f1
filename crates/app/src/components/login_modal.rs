use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBuilding, LdLock, LdMail, LdPhone, LdShield, LdUser};
use dioxus_free_icons::Icon;
use shared_types::{
    fabricate_user, login_notice, shows_name_field, shows_phone_field, shows_social_login,
    social_notice, social_user, CredentialForm, FeatureFlags, Notice, Role, SimulationConfig,
    User, ALL_PROVIDERS,
};
use shared_ui::{
    Button, ButtonVariant, DialogContent, DialogDescription, DialogRoot, DialogTitle, Field,
    Input,
};

use crate::format_helpers::today_iso;
use crate::notify::use_notifier;
use crate::routes::Route;
use crate::session::use_session;

/// Credential modal for the role picked on the landing page.
///
/// Any input succeeds; the form only shapes the fabricated user.
#[component]
pub fn LoginModal() -> Element {
    let mut session = use_session();
    let flags = use_context::<FeatureFlags>();
    let sim = use_context::<SimulationConfig>();
    let notifier = use_notifier();
    let mut form = use_signal(CredentialForm::default);

    let (open, role) = {
        let s = session.session.read();
        (s.login_open, s.selected_role)
    };
    let Some(role) = role else {
        return rsx! {};
    };
    let mode = form.read().mode;

    let mut finish = move |user: User, notice: Notice| match session.complete_login(user) {
        Ok(_) => {
            form.set(CredentialForm::default());
            notifier.show(notice);
            navigator().push(Route::Dashboard {});
        }
        Err(e) => {
            tracing::warn!(error = %e, "sign-in rejected");
            notifier.show(Notice::error("Sign-in failed", e.message));
        }
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let user = fabricate_user(&form.read(), role, &sim, &today_iso());
        finish(user, login_notice(mode, role));
    };

    let (prompt, switch_label) = mode.switch_prompt();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login_modal.css") }
        DialogRoot {
            open: open,
            on_open_change: move |open: bool| {
                if !open {
                    session.close_login();
                }
            },
            DialogContent {
                div { class: "login-header",
                    div { class: "login-role-icon",
                        match role {
                            Role::Player => rsx! { Icon::<LdUser> { icon: LdUser, width: 32, height: 32 } },
                            Role::Club => rsx! { Icon::<LdBuilding> { icon: LdBuilding, width: 32, height: 32 } },
                            Role::Admin => rsx! { Icon::<LdShield> { icon: LdShield, width: 32, height: 32 } },
                        }
                    }
                    DialogTitle { "{mode.heading()}" }
                    DialogDescription { "{role.tagline()}" }
                }

                form { class: "login-form", onsubmit: on_submit,
                    if shows_name_field(mode) {
                        Field { html_for: "name", label: "Full Name",
                            Input {
                                id: "name",
                                placeholder: "Enter your full name",
                                value: form.read().name.clone(),
                                on_input: move |e: FormEvent| form.write().name = e.value(),
                                leading: rsx! { Icon::<LdUser> { icon: LdUser, width: 16, height: 16 } },
                            }
                        }
                    }
                    Field { html_for: "email", label: "Email",
                        Input {
                            id: "email",
                            input_type: "email",
                            placeholder: "Enter your email",
                            value: form.read().email.clone(),
                            on_input: move |e: FormEvent| form.write().email = e.value(),
                            leading: rsx! { Icon::<LdMail> { icon: LdMail, width: 16, height: 16 } },
                        }
                    }
                    Field { html_for: "password", label: "Password",
                        Input {
                            id: "password",
                            input_type: "password",
                            placeholder: "Enter your password",
                            value: form.read().password.clone(),
                            on_input: move |e: FormEvent| form.write().password = e.value(),
                            leading: rsx! { Icon::<LdLock> { icon: LdLock, width: 16, height: 16 } },
                        }
                    }
                    if shows_phone_field(role, mode) {
                        Field { html_for: "phone", label: "Phone Number",
                            Input {
                                id: "phone",
                                input_type: "tel",
                                placeholder: "Enter your phone number",
                                value: form.read().phone.clone(),
                                on_input: move |e: FormEvent| form.write().phone = e.value(),
                                leading: rsx! { Icon::<LdPhone> { icon: LdPhone, width: 16, height: 16 } },
                            }
                        }
                    }
                    Button { submit: true, full_width: true, "{mode.submit_label()}" }
                }

                if shows_social_login(role, &flags) {
                    hr { class: "login-separator" }
                    div { class: "login-social",
                        for provider in ALL_PROVIDERS.iter().copied() {
                            Button {
                                key: "{provider.as_str()}",
                                variant: ButtonVariant::Outline,
                                full_width: true,
                                onclick: move |_| {
                                    let user = social_user(provider, role, &sim, &today_iso());
                                    finish(user, social_notice(provider));
                                },
                                "Continue with {provider.display_name()}"
                            }
                        }
                    }
                }

                p { class: "login-switch",
                    "{prompt}"
                    button {
                        r#type: "button",
                        class: "login-switch-link",
                        onclick: move |_| {
                            let next = form.read().mode.toggled();
                            form.write().mode = next;
                        },
                        "{switch_label}"
                    }
                }
            }
        }
    }
}
