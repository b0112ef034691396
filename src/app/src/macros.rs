/// Macro for model field updates with automatic rendering.
/// Supports both single and multiple field updates.
///
/// # Examples
///
/// Single field update:
/// ```ignore
/// update_field!(model.intent, intent)
/// ```
///
/// Multiple field updates:
/// ```ignore
/// update_field!(
///     model.is_fetching_networks, false;
///     model.error_message, None
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

/// Macro for GET requests that run against a deadline.
///
/// Opens a ticket for the request, then issues the request and a deadline
/// carrying the same ticket. The response arrives as
/// `Event::$domain($domain_event::$response_event { ticket, result })`, the
/// deadline as `Event::$domain($domain_event::$deadline_event(output))`.
///
/// # Example
/// ```ignore
/// tracked_get!(Catalog, CatalogEvent, model, Scan, url, ScanResponse, ScanDeadline,
///     expect_json: Vec<Network>
/// )
/// ```
#[macro_export]
macro_rules! tracked_get {
    ($domain:ident, $domain_event:ident, $model:expr, $kind:ident, $url:expr, $response_event:ident, $deadline_event:ident, expect_json: $response_type:ty) => {{
        let url = $url;
        let ticket = $model.pending.open($crate::types::RequestKind::$kind);
        let millis = $model.config.request_timeout_ms;
        log::debug!("GET {url} (ticket {ticket})");
        crux_core::Command::all([
            crux_core::render::render(),
            $crate::HttpCmd::get(&url).build().then_send(move |result| {
                let result: Result<$response_type, String> = $crate::process_json_response(result);
                $crate::events::Event::$domain($crate::events::$domain_event::$response_event {
                    ticket,
                    result,
                })
            }),
            $crate::DeadlineCmd::start(ticket, millis)
                .build()
                .then_send(|output| {
                    $crate::events::Event::$domain($crate::events::$domain_event::$deadline_event(
                        output,
                    ))
                }),
        ])
    }};
}

/// Macro for JSON POST requests that run against a deadline and only inspect
/// the response status.
///
/// `$action` is the failure message prefix used if the body cannot be encoded.
///
/// # Example
/// ```ignore
/// tracked_post!(Submit, SubmitEvent, model, Connect, url, ConnectResponse, ConnectDeadline,
///     CONNECT_FAILED,
///     body_json: &intent
/// )
/// ```
#[macro_export]
macro_rules! tracked_post {
    ($domain:ident, $domain_event:ident, $model:expr, $kind:ident, $url:expr, $response_event:ident, $deadline_event:ident, $action:expr, body_json: $body:expr) => {{
        let url = $url;
        match $crate::HttpCmd::post(&url)
            .header("Content-Type", "application/json")
            .body_json($body)
        {
            Ok(builder) => {
                let ticket = $model.pending.open($crate::types::RequestKind::$kind);
                let millis = $model.config.request_timeout_ms;
                log::debug!("POST {url} (ticket {ticket})");
                crux_core::Command::all([
                    crux_core::render::render(),
                    builder.build().then_send(move |result| {
                        let result = $crate::process_status_response(result);
                        $crate::events::Event::$domain(
                            $crate::events::$domain_event::$response_event { ticket, result },
                        )
                    }),
                    $crate::DeadlineCmd::start(ticket, millis)
                        .build()
                        .then_send(|output| {
                            $crate::events::Event::$domain(
                                $crate::events::$domain_event::$deadline_event(output),
                            )
                        }),
                ])
            }
            Err(e) => $model.set_error_and_render($crate::http_helpers::failure_message(
                $action,
                &format!("Failed to encode request: {e}"),
            )),
        }
    }};
}
