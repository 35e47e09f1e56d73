use crux_core::{render::render, Command};

use crate::api_get;
use crate::api_post_json;
use crate::commands::browser;
use crate::events::{CloudEvent, Event};
use crate::model::Model;
use crate::types::{
    CompletionSummary, LoginRequest, LoginResult, OauthPollState, OauthStart, OauthStatus,
    ProvisionInfo, ProvisionRequest, ProvisionResult, Step, OAUTH_POLL_INTERVAL_MS,
    OAUTH_POLL_TIMEOUT_MS,
};
use crate::Effect;

use super::setup::go_to_step;

/// MyPVLog.net account registration page, opened in a popup.
const SIGNUP_URL: &str = "https://mypvlog.net/register";

/// Handle cloud sign-in, OAuth wait and provisioning events
pub fn handle(event: CloudEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        CloudEvent::Login { email, password } => {
            let request = LoginRequest { email, password };
            api_post_json!(Cloud, CloudEvent, model, "/api/mypvlog/login", LoginResponse, "Login",
                loading: "Signing in to MyPVLog.net...",
                body_json: &request,
                expect_json: LoginResult,
                map: LoginResult::into_token)
        }

        // The provisioning loading message replaces the sign-in one directly;
        // hiding in between would flicker the indicator.
        CloudEvent::LoginResponse(Ok(token)) => provision(token, model),
        CloudEvent::LoginResponse(Err(e)) => model.set_error_and_render(e),

        CloudEvent::GoogleSignIn => {
            if let OauthPollState::Waiting { .. } = model.oauth_poll {
                // One OAuth wait per session; ignore double-starts.
                return render();
            }
            model.show_loading("Opening Google Sign-In...");
            Command::all([
                render(),
                api_get!(Cloud, CloudEvent, "/api/mypvlog/oauth/google", GoogleSignInResponse, "OAuth",
                    expect_json: OauthStart,
                    map: OauthStart::into_url),
            ])
        }

        CloudEvent::GoogleSignInResponse(Ok(url)) => {
            model.oauth_poll = OauthPollState::Waiting { elapsed_ms: 0 };
            Command::all([render(), browser::open_popup(url)])
        }
        CloudEvent::GoogleSignInResponse(Err(e)) => model.set_error_and_render(e),

        // Shell sends this every `OAUTH_POLL_INTERVAL_MS` while the poll
        // state is `Waiting`; the core owns the deadline.
        CloudEvent::OauthCheckTick => match &mut model.oauth_poll {
            OauthPollState::Waiting { elapsed_ms } => {
                *elapsed_ms += OAUTH_POLL_INTERVAL_MS;
                if *elapsed_ms >= OAUTH_POLL_TIMEOUT_MS {
                    // Give up without a notice, leaving the wizard on its
                    // current step.
                    log::warn!("OAuth wait abandoned after {OAUTH_POLL_TIMEOUT_MS} ms");
                    model.oauth_poll = OauthPollState::Idle;
                    model.hide_loading();
                    render()
                } else {
                    api_get!(Cloud, CloudEvent, "/api/mypvlog/oauth/status", OauthStatusResponse, "OAuth status",
                        expect_json: OauthStatus)
                }
            }
            OauthPollState::Idle => render(),
        },

        CloudEvent::OauthStatusResponse(result) => {
            // Replies arriving after cancel or timeout are dropped, so the
            // authenticated continuation runs at most once.
            if !matches!(model.oauth_poll, OauthPollState::Waiting { .. }) {
                return render();
            }
            match result {
                Ok(OauthStatus {
                    authenticated: true,
                    token: Some(token),
                }) => {
                    model.oauth_poll = OauthPollState::Idle;
                    provision(token, model)
                }
                // Not authenticated yet (or no token reported): keep waiting.
                Ok(_) => render(),
                Err(e) => {
                    // Transient check failures never abort the wait.
                    log::debug!("OAuth status check failed: {e}");
                    render()
                }
            }
        }

        CloudEvent::OauthCancel => {
            model.oauth_poll = OauthPollState::Idle;
            model.hide_loading();
            render()
        }

        CloudEvent::ProvisionResponse(Ok(info)) => {
            model.completion = Some(provision_completion(&info));
            model.hide_loading();
            go_to_step(Step::Complete, model)
        }
        CloudEvent::ProvisionResponse(Err(e)) => model.set_error_and_render(e),

        CloudEvent::OpenSignup => browser::open_popup(SIGNUP_URL),
    }
}

/// Register the DTU with the credential obtained from login or OAuth. The
/// token is consumed here and never stored in the model.
fn provision(token: String, model: &mut Model) -> Command<Effect, Event> {
    let request = ProvisionRequest { token };
    api_post_json!(Cloud, CloudEvent, model, "/api/mypvlog/provision", ProvisionResponse, "Provisioning",
        loading: "Registering device with MyPVLog.net...",
        body_json: &request,
        expect_json: ProvisionResult,
        map: ProvisionResult::into_info)
}

/// Completion summary for a provisioned DTU.
fn provision_completion(info: &ProvisionInfo) -> CompletionSummary {
    CompletionSummary {
        message: "MyPVLog Direct mode configured successfully!".to_string(),
        next_steps: vec![
            format!("DTU registered: {}", info.dtu_id),
            format!("Found {} inverter(s)", info.inverter_count),
            "View your dashboard at mypvlog.net".to_string(),
            "Download the mobile app for on-the-go monitoring".to_string(),
            "Device will reboot and start polling inverters".to_string(),
        ],
    }
}
