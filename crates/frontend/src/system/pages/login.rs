use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_SYSTEM};
use crate::system::auth::{api, context::use_auth};

const LOGIN_ERROR: &str = "Não foi possível entrar. Verifique e-mail e senha.";

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_auth();
    let email = RwSignal::new(String::new());
    let senha = RwSignal::new(String::new());
    let error_message = RwSignal::new(None::<String>);
    let is_loading = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }

        let email_val = email.get_untracked().trim().to_string();
        let senha_val = senha.get_untracked();
        if email_val.is_empty() || senha_val.is_empty() {
            error_message.set(Some("Informe e-mail e senha.".to_string()));
            return;
        }

        is_loading.set(true);
        error_message.set(None);

        spawn_local(async move {
            match api::login(email_val, senha_val).await {
                Ok(response) => {
                    is_loading.try_set(false);
                    session.login(response);
                }
                Err(e) => {
                    log::warn!("login failed: {}", e);
                    error_message.try_set(Some(e.user_message(LOGIN_ERROR)));
                    is_loading.try_set(false);
                }
            }
        });
    };

    view! {
        <PageFrame page_id=page_id("login", PAGE_CAT_SYSTEM) category=PAGE_CAT_SYSTEM>
            <div class="login-container">
                <div class="login-box">
                    <h1>"Merenda"</h1>
                    <h2>"Gestão da alimentação escolar"</h2>

                    <Show when=move || error_message.get().is_some()>
                        <div class="error-message">
                            {move || error_message.get().unwrap_or_default()}
                        </div>
                    </Show>

                    <form on:submit=on_submit>
                        <div class="form__group">
                            <label class="form__label" for="email">"E-mail"</label>
                            <input
                                type="email"
                                id="email"
                                class="form__input"
                                autocomplete="username"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                                disabled=move || is_loading.get()
                            />
                        </div>

                        <div class="form__group">
                            <label class="form__label" for="senha">"Senha"</label>
                            <input
                                type="password"
                                id="senha"
                                class="form__input"
                                autocomplete="current-password"
                                prop:value=move || senha.get()
                                on:input=move |ev| senha.set(event_target_value(&ev))
                                disabled=move || is_loading.get()
                            />
                        </div>

                        <button
                            type="submit"
                            class="button button--primary login-box__submit"
                            disabled=move || is_loading.get()
                        >
                            {move || if is_loading.get() { "Entrando..." } else { "Entrar" }}
                        </button>
                    </form>
                </div>
            </div>
        </PageFrame>
    }
}
