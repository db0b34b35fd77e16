//! HTTP/2 protocol options.
//!
//! Anti-bot systems fingerprint HTTP/2 at multiple levels: SETTINGS frame
//! parameter order and values, pseudo-header field order in HEADERS frames,
//! PRIORITY frames sent after the preface, and window sizes. The frame-order
//! types come from the forked `http2` crate, which consumes them directly.

use std::time::Duration;

use crate::base::overlay_fields;

// Re-export from the http2 crate for fingerprint control.
pub use http2::frame::{
    ExperimentalSettings, Priorities, PrioritiesBuilder, Priority, PseudoId, PseudoOrder, Setting,
    SettingId, SettingsOrder, SettingsOrderBuilder, StreamDependency, StreamId,
};

/// HTTP/2 connection-level options.
///
/// All fields optional; `None` inherits the next precedence level.
#[derive(Debug, Clone, Default)]
pub struct Http2Options {
    /// SETTINGS_INITIAL_WINDOW_SIZE, stream-level flow control.
    pub initial_window_size: Option<u32>,

    /// Connection-level flow control window.
    pub initial_connection_window_size: Option<u32>,

    /// Initial maximum number of locally initiated streams.
    pub initial_max_send_streams: Option<usize>,

    /// Stream ID of the first request stream.
    pub initial_stream_id: Option<u32>,

    /// Use adaptive flow control.
    pub adaptive_window: Option<bool>,

    /// SETTINGS_MAX_FRAME_SIZE.
    pub max_frame_size: Option<u32>,

    /// SETTINGS_MAX_HEADER_LIST_SIZE.
    pub max_header_list_size: Option<u32>,

    /// SETTINGS_HEADER_TABLE_SIZE, HPACK dynamic table.
    pub header_table_size: Option<u32>,

    /// SETTINGS_MAX_CONCURRENT_STREAMS.
    pub max_concurrent_streams: Option<u32>,

    /// Interval for keep-alive PING frames.
    pub keep_alive_interval: Option<Duration>,

    /// Timeout for PING acknowledgement.
    pub keep_alive_timeout: Option<Duration>,

    /// Send keep-alive PINGs while the connection is idle.
    pub keep_alive_while_idle: Option<bool>,

    /// SETTINGS_ENABLE_PUSH.
    pub enable_push: Option<bool>,

    /// SETTINGS_ENABLE_CONNECT_PROTOCOL (RFC 8441).
    pub enable_connect_protocol: Option<bool>,

    /// SETTINGS_NO_RFC7540_PRIORITIES (RFC 9218).
    pub no_rfc7540_priorities: Option<bool>,

    /// Maximum number of concurrent locally reset streams.
    pub max_concurrent_reset_streams: Option<usize>,

    /// Maximum send buffer size per stream.
    pub max_send_buf_size: Option<usize>,

    /// Maximum number of pending-accept reset streams.
    pub max_pending_accept_reset_streams: Option<usize>,

    /// Stream dependency for outgoing HEADERS frames.
    pub headers_stream_dependency: Option<StreamDependency>,

    /// Pseudo-header field order for outgoing HEADERS frames.
    pub headers_pseudo_order: Option<PseudoOrder>,

    /// Custom experimental SETTINGS.
    pub experimental_settings: Option<ExperimentalSettings>,

    /// Order of parameters in the initial SETTINGS frame.
    pub settings_order: Option<SettingsOrder>,

    /// PRIORITY frames to send after connection establishment.
    pub priorities: Option<Priorities>,
}

impl Http2Options {
    pub fn builder() -> Http2OptionsBuilder {
        Http2OptionsBuilder::default()
    }

    pub(crate) fn overlaid_with(&self, over: &Http2Options) -> Http2Options {
        overlay_fields!(self, over, {
            initial_window_size,
            initial_connection_window_size,
            initial_max_send_streams,
            initial_stream_id,
            adaptive_window,
            max_frame_size,
            max_header_list_size,
            header_table_size,
            max_concurrent_streams,
            keep_alive_interval,
            keep_alive_timeout,
            keep_alive_while_idle,
            enable_push,
            enable_connect_protocol,
            no_rfc7540_priorities,
            max_concurrent_reset_streams,
            max_send_buf_size,
            max_pending_accept_reset_streams,
            headers_stream_dependency,
            headers_pseudo_order,
            experimental_settings,
            settings_order,
            priorities,
        })
    }
}

/// Builder for [`Http2Options`].
#[must_use]
#[derive(Debug, Clone, Default)]
pub struct Http2OptionsBuilder {
    config: Http2Options,
}

impl Http2OptionsBuilder {
    pub fn initial_window_size(mut self, size: u32) -> Self {
        self.config.initial_window_size = Some(size);
        self
    }

    pub fn initial_connection_window_size(mut self, size: u32) -> Self {
        self.config.initial_connection_window_size = Some(size);
        self
    }

    pub fn initial_max_send_streams(mut self, max: usize) -> Self {
        self.config.initial_max_send_streams = Some(max);
        self
    }

    pub fn initial_stream_id(mut self, id: u32) -> Self {
        self.config.initial_stream_id = Some(id);
        self
    }

    pub fn adaptive_window(mut self, enabled: bool) -> Self {
        self.config.adaptive_window = Some(enabled);
        self
    }

    pub fn max_frame_size(mut self, size: u32) -> Self {
        self.config.max_frame_size = Some(size);
        self
    }

    pub fn max_header_list_size(mut self, size: u32) -> Self {
        self.config.max_header_list_size = Some(size);
        self
    }

    pub fn header_table_size(mut self, size: u32) -> Self {
        self.config.header_table_size = Some(size);
        self
    }

    pub fn max_concurrent_streams(mut self, max: u32) -> Self {
        self.config.max_concurrent_streams = Some(max);
        self
    }

    pub fn keep_alive_interval(mut self, interval: Duration) -> Self {
        self.config.keep_alive_interval = Some(interval);
        self
    }

    pub fn keep_alive_timeout(mut self, timeout: Duration) -> Self {
        self.config.keep_alive_timeout = Some(timeout);
        self
    }

    pub fn keep_alive_while_idle(mut self, enabled: bool) -> Self {
        self.config.keep_alive_while_idle = Some(enabled);
        self
    }

    pub fn enable_push(mut self, enabled: bool) -> Self {
        self.config.enable_push = Some(enabled);
        self
    }

    pub fn enable_connect_protocol(mut self, enabled: bool) -> Self {
        self.config.enable_connect_protocol = Some(enabled);
        self
    }

    pub fn no_rfc7540_priorities(mut self, enabled: bool) -> Self {
        self.config.no_rfc7540_priorities = Some(enabled);
        self
    }

    pub fn max_concurrent_reset_streams(mut self, max: usize) -> Self {
        self.config.max_concurrent_reset_streams = Some(max);
        self
    }

    pub fn max_send_buf_size(mut self, size: usize) -> Self {
        self.config.max_send_buf_size = Some(size);
        self
    }

    pub fn max_pending_accept_reset_streams(mut self, max: usize) -> Self {
        self.config.max_pending_accept_reset_streams = Some(max);
        self
    }

    pub fn headers_stream_dependency(mut self, dependency: StreamDependency) -> Self {
        self.config.headers_stream_dependency = Some(dependency);
        self
    }

    pub fn headers_pseudo_order(mut self, order: PseudoOrder) -> Self {
        self.config.headers_pseudo_order = Some(order);
        self
    }

    pub fn experimental_settings(mut self, settings: ExperimentalSettings) -> Self {
        self.config.experimental_settings = Some(settings);
        self
    }

    pub fn settings_order(mut self, order: SettingsOrder) -> Self {
        self.config.settings_order = Some(order);
        self
    }

    pub fn priorities(mut self, priorities: Priorities) -> Self {
        self.config.priorities = Some(priorities);
        self
    }

    pub fn build(self) -> Http2Options {
        self.config
    }
}
