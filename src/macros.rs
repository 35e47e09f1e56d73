/// Macro for model field updates with automatic rendering.
/// Supports both single and multiple field updates.
///
/// # Examples
///
/// Single field update:
/// ```ignore
/// update_field!(model.error_message, None)
/// ```
///
/// Multiple field updates:
/// ```ignore
/// update_field!(
///     model.wifi_networks, networks;
///     model.wifi_scan_failed, false
/// )
/// ```
#[macro_export]
macro_rules! update_field {
    // Multiple field updates (must come first to match the pattern)
    ($($model_field:expr, $value:expr);+ $(;)?) => {{
        let mut changed = false;
        $(
            let value = $value;
            if $model_field != value {
                $model_field = value;
                changed = true;
            }
        )+
        if changed {
            crux_core::render::render()
        } else {
            crux_core::Command::done()
        }
    }};

    // Single field update
    ($model_field:expr, $value:expr) => {{
        update_field!($model_field, $value;)
    }};
}

// Re-export http_helpers functions for macro use
pub use crate::http_helpers::{
    ack_to_result, build_url, extract_error_message, is_response_success, map_transport_error,
    parse_json_response, process_ack_response, process_json_response, BASE_URL,
};

/// Macro for GET requests expecting a JSON payload.
/// Does not touch the loading state; the response handler decides whether a
/// failure is surfaced (startup data and background polling swallow theirs).
///
/// # Patterns
///
/// Pattern 1: plain JSON response
/// ```ignore
/// api_get!(Setup, SetupEvent, "/api/version", VersionResponse, "Version",
///     expect_json: VersionInfo)
/// ```
///
/// Pattern 2: JSON response collapsed by a mapper
/// ```ignore
/// api_get!(Cloud, CloudEvent, "/api/mypvlog/oauth/google", GoogleSignInResponse, "OAuth",
///     expect_json: OauthStart,
///     map: OauthStart::into_url)
/// ```
#[macro_export]
macro_rules! api_get {
    ($domain:ident, $domain_event:ident, $endpoint:expr, $response_event:ident, $label:expr, expect_json: $response_type:ty) => {
        $crate::api_get!($domain, $domain_event, $endpoint, $response_event, $label,
            expect_json: $response_type,
            map: Ok)
    };

    ($domain:ident, $domain_event:ident, $endpoint:expr, $response_event:ident, $label:expr, expect_json: $response_type:ty, map: $mapper:expr) => {
        $crate::HttpCmd::get($crate::build_url($endpoint))
            .build()
            .then_send(|result| {
                let event_result = $crate::process_json_response::<$response_type>($label, result)
                    .and_then($mapper);
                $crate::events::Event::$domain($crate::events::$domain_event::$response_event(
                    event_result,
                ))
            })
    };
}

/// Macro for POST requests whose response is the DTU's `{success, error}`
/// envelope. Shows the loading indicator with the given message; hiding it
/// again is the response handler's per-call decision.
///
/// # Example
/// ```ignore
/// api_post_ack!(Wifi, WifiEvent, model, "/api/wifi/connect", ConnectResponse, "WiFi connection",
///     loading: "Connecting to WiFi...",
///     body_json: &request)
/// ```
#[macro_export]
macro_rules! api_post_ack {
    ($domain:ident, $domain_event:ident, $model:expr, $endpoint:expr, $response_event:ident, $label:expr, loading: $loading:expr, body_json: $body:expr) => {{
        $model.show_loading($loading);
        match $crate::HttpCmd::post($crate::build_url($endpoint))
            .header("Content-Type", "application/json")
            .body_json($body)
        {
            Ok(builder) => crux_core::Command::all([
                crux_core::render::render(),
                builder.build().then_send(|result| {
                    let event_result = $crate::process_ack_response($label, result);
                    $crate::events::Event::$domain($crate::events::$domain_event::$response_event(
                        event_result,
                    ))
                }),
            ]),
            Err(e) => {
                $model.set_error_and_render(format!("Failed to create {} request: {e}", $label))
            }
        }
    }};
}

/// Macro for POST requests with a typed JSON response, collapsed into the
/// response event's payload by a mapper. Shows the loading indicator with the
/// given message.
///
/// # Example
/// ```ignore
/// api_post_json!(Cloud, CloudEvent, model, "/api/mypvlog/login", LoginResponse, "Login",
///     loading: "Signing in to MyPVLog.net...",
///     body_json: &request,
///     expect_json: LoginResult,
///     map: LoginResult::into_token)
/// ```
#[macro_export]
macro_rules! api_post_json {
    ($domain:ident, $domain_event:ident, $model:expr, $endpoint:expr, $response_event:ident, $label:expr, loading: $loading:expr, body_json: $body:expr, expect_json: $response_type:ty, map: $mapper:expr) => {{
        $model.show_loading($loading);
        match $crate::HttpCmd::post($crate::build_url($endpoint))
            .header("Content-Type", "application/json")
            .body_json($body)
        {
            Ok(builder) => crux_core::Command::all([
                crux_core::render::render(),
                builder.build().then_send(|result| {
                    let event_result = $crate::process_json_response::<$response_type>($label, result)
                        .and_then($mapper);
                    $crate::events::Event::$domain($crate::events::$domain_event::$response_event(
                        event_result,
                    ))
                }),
            ]),
            Err(e) => {
                $model.set_error_and_render(format!("Failed to create {} request: {e}", $label))
            }
        }
    }};
}
