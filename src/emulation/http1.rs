//! HTTP/1.1 protocol options.

use crate::base::overlay_fields;

/// HTTP/1.1 protocol options.
///
/// All fields are optional; `None` inherits the next precedence level. The
/// lenient-parsing flags reproduce quirks some real clients tolerate in
/// responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Http1Options {
    /// Accept HTTP/0.9 responses.
    pub http09_responses: Option<bool>,

    /// Use vectored writes.
    pub writev: Option<bool>,

    /// Maximum number of response headers.
    pub max_headers: Option<usize>,

    /// Exact read buffer size.
    pub read_buf_exact_size: Option<usize>,

    /// Maximum connection buffer size.
    pub max_buf_size: Option<usize>,

    /// Allow spaces between a header name and the colon in responses.
    pub allow_spaces_after_header_name_in_responses: Option<bool>,

    /// Silently skip invalid response headers instead of failing.
    pub ignore_invalid_headers_in_responses: Option<bool>,

    /// Allow obsolete multiline (obs-fold) response headers.
    pub allow_obsolete_multiline_headers_in_responses: Option<bool>,
}

impl Http1Options {
    pub fn builder() -> Http1OptionsBuilder {
        Http1OptionsBuilder::default()
    }

    pub(crate) fn overlaid_with(&self, over: &Http1Options) -> Http1Options {
        overlay_fields!(self, over, {
            http09_responses,
            writev,
            max_headers,
            read_buf_exact_size,
            max_buf_size,
            allow_spaces_after_header_name_in_responses,
            ignore_invalid_headers_in_responses,
            allow_obsolete_multiline_headers_in_responses,
        })
    }
}

/// Builder for [`Http1Options`].
#[must_use]
#[derive(Debug, Clone, Default)]
pub struct Http1OptionsBuilder {
    config: Http1Options,
}

impl Http1OptionsBuilder {
    pub fn http09_responses(mut self, enabled: bool) -> Self {
        self.config.http09_responses = Some(enabled);
        self
    }

    pub fn writev(mut self, enabled: bool) -> Self {
        self.config.writev = Some(enabled);
        self
    }

    pub fn max_headers(mut self, max: usize) -> Self {
        self.config.max_headers = Some(max);
        self
    }

    pub fn read_buf_exact_size(mut self, size: usize) -> Self {
        self.config.read_buf_exact_size = Some(size);
        self
    }

    pub fn max_buf_size(mut self, size: usize) -> Self {
        self.config.max_buf_size = Some(size);
        self
    }

    pub fn allow_spaces_after_header_name_in_responses(mut self, enabled: bool) -> Self {
        self.config.allow_spaces_after_header_name_in_responses = Some(enabled);
        self
    }

    pub fn ignore_invalid_headers_in_responses(mut self, enabled: bool) -> Self {
        self.config.ignore_invalid_headers_in_responses = Some(enabled);
        self
    }

    pub fn allow_obsolete_multiline_headers_in_responses(mut self, enabled: bool) -> Self {
        self.config.allow_obsolete_multiline_headers_in_responses = Some(enabled);
        self
    }

    pub fn build(self) -> Http1Options {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let opts = Http1Options::builder()
            .http09_responses(true)
            .max_headers(100)
            .build();
        assert_eq!(opts.http09_responses, Some(true));
        assert_eq!(opts.max_headers, Some(100));
        assert!(opts.writev.is_none());
    }

    #[test]
    fn test_overlay() {
        let base = Http1Options::builder().max_headers(100).writev(true).build();
        let over = Http1Options::builder().max_headers(50).build();
        let merged = base.overlaid_with(&over);
        assert_eq!(merged.max_headers, Some(50));
        assert_eq!(merged.writev, Some(true));
    }
}
