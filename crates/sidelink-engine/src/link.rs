use sidelink_collections::ZString;
use sidelink_stream::ByteStream;
use sidelink_wire::{
    read_line, read_reply, send_command, send_command_value, send_data, split_command_value, Token,
    CMD_ALLOW_GPIO, CMD_CONNECT, CMD_DISALLOW_GPIO, CMD_DISCONNECT, CMD_GET_IP, CMD_IS_CONNECTED,
    CMD_LED_MODE, CMD_PASSWORD, CMD_SSID, RESPONSE_END, RESPONSE_START, TOK_GET_VALUE,
};
use tracing::debug;

use crate::config::LinkConfig;
use crate::error::Result;
use crate::request::{Request, RequestVar};
use crate::types::{HttpVerb, LedMode};

/// Driver for a WiFi co-processor on the far end of a byte stream.
///
/// The link owns its stream exclusively and advances only when called; the
/// only blocking it does is the deadline-bounded line read configured in
/// [`LinkConfig::response_timeout`].
pub struct Link<S: ByteStream> {
    stream: S,
    config: LinkConfig,
}

impl<S: ByteStream> Link<S> {
    pub fn new(stream: S, config: LinkConfig) -> Self {
        Self { stream, config }
    }

    pub fn config(&self) -> &LinkConfig {
        &self.config
    }

    /// Borrow the underlying stream.
    pub fn stream_ref(&self) -> &S {
        &self.stream
    }

    /// Mutably borrow the underlying stream.
    pub fn stream_mut(&mut self) -> &mut S {
        &mut self.stream
    }

    /// Consume the link and return the stream.
    pub fn into_stream(self) -> S {
        self.stream
    }

    /// Provision the co-processor: SSID, password, GPIO delegation.
    ///
    /// Each line is one-way; no acknowledgement is expected at this layer.
    pub fn init(&mut self) -> Result<()> {
        debug!(ssid = %self.config.ssid, "provisioning co-processor");
        send_command_value(&mut self.stream, CMD_SSID, &self.config.ssid)?;
        send_command_value(&mut self.stream, CMD_PASSWORD, &self.config.password)?;
        let gpio = if self.config.allow_gpio {
            CMD_ALLOW_GPIO
        } else {
            CMD_DISALLOW_GPIO
        };
        send_command(&mut self.stream, gpio)?;
        Ok(())
    }

    /// Ask the co-processor to join the provisioned network. Fire-and-forget.
    pub fn connect(&mut self) -> Result<()> {
        send_command(&mut self.stream, CMD_CONNECT)?;
        Ok(())
    }

    /// Ask the co-processor to leave the network. Fire-and-forget.
    pub fn disconnect(&mut self) -> Result<()> {
        send_command(&mut self.stream, CMD_DISCONNECT)?;
        Ok(())
    }

    /// Query connection state. The reply must echo the command; its
    /// remainder is `1` for connected.
    pub fn is_connected(&mut self) -> Result<bool> {
        send_command(&mut self.stream, CMD_IS_CONNECTED)?;
        let reply = read_reply(
            &mut self.stream,
            CMD_IS_CONNECTED,
            self.config.response_timeout,
        )?;
        Ok(reply == "1")
    }

    /// Query the assigned IP address, returned verbatim.
    pub fn ip_address(&mut self) -> Result<ZString> {
        send_command(&mut self.stream, CMD_GET_IP)?;
        let reply = read_reply(&mut self.stream, CMD_GET_IP, self.config.response_timeout)?;
        Ok(reply)
    }

    /// Select the co-processor's status LED mode.
    pub fn set_led_mode(&mut self, mode: LedMode) -> Result<()> {
        send_command_value(&mut self.stream, CMD_LED_MODE, mode.wire_value())?;
        Ok(())
    }

    /// Delegate an HTTP GET and return the response body.
    pub fn get(&mut self, url: &str) -> Result<ZString> {
        self.fetch(HttpVerb::Get, url)
    }

    /// Delegate an HTTP POST and return the response body.
    pub fn post(&mut self, url: &str) -> Result<ZString> {
        self.fetch(HttpVerb::Post, url)
    }

    /// Send verb+URL, then fold response lines into a body.
    ///
    /// Lines before `response_start` are noise and discarded. After the
    /// marker, lines up to the first blank line are headers (discarded);
    /// everything after it accumulates into the body until `response_end`.
    /// A timeout anywhere short-circuits the fold and propagates.
    fn fetch(&mut self, verb: HttpVerb, url: &str) -> Result<ZString> {
        debug!(verb = verb.command(), url, "delegating request");
        send_command_value(&mut self.stream, verb.command(), url)?;

        let mut body = ZString::new();
        let mut response_started = false;
        let mut headers_finished = false;
        loop {
            let line = read_line(&mut self.stream, self.config.response_timeout)?;

            if line == RESPONSE_START {
                response_started = true;
            } else if !response_started {
                continue;
            } else if line == RESPONSE_END {
                break;
            } else {
                if headers_finished {
                    body.push_bytes(line.as_bytes());
                }
                if line.is_empty() {
                    headers_finished = true;
                }
            }
        }
        Ok(body)
    }

    /// Check for an inbound request without blocking on an idle stream.
    ///
    /// Returns `Ok(None)` immediately when no bytes are available, consuming
    /// nothing. Otherwise reads command/value lines: a `method` line opens a
    /// request, `path_frament` and `get_var`/`get_value` lines populate it,
    /// and `respond` closes it. Unknown commands are consumed and ignored. A
    /// timeout mid-request returns the partial request with
    /// [`Request::complete`] still false.
    pub fn poll(&mut self) -> Result<Option<Request>> {
        if self.stream.available()? == 0 {
            return Ok(None);
        }

        let (command, value) = match self.read_command_value() {
            Ok(pair) => pair,
            Err(err) if err.is_timeout() => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        if Token::parse(command.as_bytes()) != Token::Method {
            return Ok(None);
        }

        let mut request = Request::started(value);
        loop {
            let (command, value) = match self.read_command_value() {
                Ok(pair) => pair,
                Err(err) if err.is_timeout() => {
                    debug!(method = %request.method, "request cut short by timeout");
                    return Ok(Some(request));
                }
                Err(err) => return Err(err.into()),
            };

            match Token::parse(command.as_bytes()) {
                Token::Respond => {
                    request.complete = true;
                    return Ok(Some(request));
                }
                Token::PathFragment => request.fragments.push(value),
                Token::GetVar => {
                    match read_reply(&mut self.stream, TOK_GET_VALUE, self.config.response_timeout)
                    {
                        Ok(var_value) => request.vars.push(RequestVar {
                            name: value,
                            value: var_value,
                        }),
                        Err(err) if err.is_timeout() => {
                            debug!(method = %request.method, "request cut short by timeout");
                            return Ok(Some(request));
                        }
                        Err(err) if err.is_unexpected_command() => {
                            debug!(%err, "query variable without value; dropped");
                        }
                        Err(err) => return Err(err.into()),
                    }
                }
                Token::Method | Token::GetValue | Token::Unknown => {}
            }
        }
    }

    /// Drain whatever bytes are available right now. Diagnostics only.
    pub fn debug_dump(&mut self) -> Result<ZString> {
        let mut out = ZString::new();
        while self.stream.available()? > 0 {
            out.push_byte(self.stream.read_byte()?);
        }
        Ok(out)
    }

    /// Send a bare command line.
    pub fn send_command(&mut self, command: &str) -> Result<()> {
        send_command(&mut self.stream, command)?;
        Ok(())
    }

    /// Send a command with a value.
    pub fn send_command_value<V: AsRef<[u8]>>(&mut self, command: &str, value: V) -> Result<()> {
        send_command_value(&mut self.stream, command, value)?;
        Ok(())
    }

    /// Send a raw data line.
    pub fn send_data<V: AsRef<[u8]>>(&mut self, data: V) -> Result<()> {
        send_data(&mut self.stream, data)?;
        Ok(())
    }

    fn read_command_value(&mut self) -> sidelink_wire::Result<(ZString, ZString)> {
        let line = read_line(&mut self.stream, self.config.response_timeout)?;
        Ok(split_command_value(&line))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use sidelink_collections::ZString;
    use sidelink_stream::MemoryDuplex;

    use super::*;

    fn test_link() -> (Link<MemoryDuplex>, MemoryDuplex) {
        let (near, far) = MemoryDuplex::pair();
        let config = LinkConfig {
            ssid: ZString::from("hangar-2"),
            password: ZString::from("hunter2"),
            response_timeout: Duration::from_millis(100),
            ..LinkConfig::default()
        };
        (Link::new(near, config), far)
    }

    fn drain(stream: &mut MemoryDuplex) -> String {
        let mut out = Vec::new();
        while stream.available().unwrap() > 0 {
            out.push(stream.read_byte().unwrap());
        }
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn init_provisions_in_order() {
        let (mut link, mut far) = test_link();
        link.init().unwrap();
        assert_eq!(drain(&mut far), "ssid hangar-2\npassword hunter2\ndisallow_gpio\n");
    }

    #[test]
    fn init_with_gpio_allowed() {
        let (near, mut far) = MemoryDuplex::pair();
        let config = LinkConfig {
            allow_gpio: true,
            ..LinkConfig::default()
        };
        let mut link = Link::new(near, config);
        link.init().unwrap();
        assert_eq!(drain(&mut far), "ssid \npassword \nallow_gpio\n");
    }

    #[test]
    fn connection_control_is_fire_and_forget() {
        let (mut link, mut far) = test_link();
        link.connect().unwrap();
        link.disconnect().unwrap();
        assert_eq!(drain(&mut far), "connect\ndisconnect\n");
    }

    #[test]
    fn is_connected_true_on_one() {
        let (mut link, mut far) = test_link();
        far.write_str("is_connected 1\n").unwrap();
        assert!(link.is_connected().unwrap());
        assert_eq!(drain(&mut far), "is_connected\n");
    }

    #[test]
    fn is_connected_false_on_zero() {
        let (mut link, mut far) = test_link();
        far.write_str("is_connected 0\n").unwrap();
        assert!(!link.is_connected().unwrap());
    }

    #[test]
    fn is_connected_rejects_wrong_echo() {
        let (mut link, mut far) = test_link();
        far.write_str("get_ip 1\n").unwrap();
        let err = link.is_connected().unwrap_err();
        assert!(err.is_unexpected_reply());
    }

    #[test]
    fn ip_address_returns_remainder_verbatim() {
        let (mut link, mut far) = test_link();
        far.write_str("get_ip 192.168.4.17\n").unwrap();
        assert_eq!(link.ip_address().unwrap(), "192.168.4.17");
        assert_eq!(drain(&mut far), "get_ip\n");
    }

    #[test]
    fn led_mode_is_decimal_text() {
        let (mut link, mut far) = test_link();
        link.set_led_mode(LedMode::Off).unwrap();
        assert_eq!(drain(&mut far), "led_mode 2\n");
    }

    #[test]
    fn get_folds_body_lines_after_headers() {
        let (mut link, mut far) = test_link();
        far.write_str("noise\nresponse_start\nHeader: v\n\nbodyline1\nbodyline2\nresponse_end\n")
            .unwrap();

        let body = link.get("/x").unwrap();
        assert_eq!(body, "bodyline1bodyline2");
        assert_eq!(drain(&mut far), "get /x\n");
    }

    #[test]
    fn post_sends_verb_and_url() {
        let (mut link, mut far) = test_link();
        far.write_str("response_start\n\nok\nresponse_end\n").unwrap();

        let body = link.post("/submit").unwrap();
        assert_eq!(body, "ok");
        assert_eq!(drain(&mut far), "post /submit\n");
    }

    #[test]
    fn get_times_out_when_response_never_ends() {
        let (mut link, mut far) = test_link();
        far.write_str("response_start\n\npartial\n").unwrap();

        let err = link.get("/x").unwrap_err();
        assert!(err.is_timeout());
    }

    #[test]
    fn get_times_out_when_nothing_arrives() {
        let (mut link, _far) = test_link();
        let err = link.get("/x").unwrap_err();
        assert!(err.is_timeout());
    }

    #[test]
    fn poll_with_no_bytes_returns_none_and_consumes_nothing() {
        let (mut link, mut far) = test_link();
        assert!(link.poll().unwrap().is_none());
        // Nothing was sent upstream either.
        assert_eq!(drain(&mut far), "");
    }

    #[test]
    fn poll_parses_a_complete_request() {
        let (mut link, mut far) = test_link();
        far.write_str(concat!(
            "method GET\n",
            "path_frament api\n",
            "path_frament v1\n",
            "get_var q\n",
            "get_value stars\n",
            "respond\n",
        ))
        .unwrap();

        let request = link.poll().unwrap().unwrap();
        assert!(request.complete);
        assert_eq!(request.method, "GET");
        assert_eq!(request.path(), "/api/v1");
        assert_eq!(request.vars.len(), 1);
        assert_eq!(request.vars[0].name, "q");
        assert_eq!(request.vars[0].value, "stars");
    }

    #[test]
    fn poll_ignores_unknown_commands() {
        let (mut link, mut far) = test_link();
        far.write_str(concat!(
            "method POST\n",
            "telemetry 42\n",
            "path_frament submit\n",
            "respond\n",
        ))
        .unwrap();

        let request = link.poll().unwrap().unwrap();
        assert!(request.complete);
        assert_eq!(request.method, "POST");
        assert_eq!(request.path(), "/submit");
    }

    #[test]
    fn poll_returns_partial_request_on_timeout() {
        let (mut link, mut far) = test_link();
        far.write_str("method GET\npath_frament api\n").unwrap();

        let request = link.poll().unwrap().unwrap();
        assert!(!request.complete);
        assert_eq!(request.method, "GET");
        assert_eq!(request.path(), "/api");
    }

    #[test]
    fn poll_drops_half_parsed_var_on_timeout() {
        let (mut link, mut far) = test_link();
        far.write_str("method GET\nget_var q\n").unwrap();

        let request = link.poll().unwrap().unwrap();
        assert!(!request.complete);
        assert!(request.vars.is_empty());
    }

    #[test]
    fn poll_skips_var_when_value_line_is_mislabelled() {
        let (mut link, mut far) = test_link();
        // The value line carries `respond` instead of `get_value`; the var
        // is dropped, the line is consumed, and the parse then times out.
        far.write_str("method GET\nget_var q\nrespond\n").unwrap();

        let request = link.poll().unwrap().unwrap();
        assert!(!request.complete);
        assert!(request.vars.is_empty());
    }

    #[test]
    fn poll_consumes_but_ignores_non_method_line() {
        let (mut link, mut far) = test_link();
        far.write_str("telemetry 42\n").unwrap();

        assert!(link.poll().unwrap().is_none());
        // The line was consumed; the next poll sees an idle stream.
        assert!(link.poll().unwrap().is_none());
        assert_eq!(link.stream_mut().available().unwrap(), 0);
        drop(far);
    }

    #[test]
    fn debug_dump_drains_available_bytes() {
        let (mut link, mut far) = test_link();
        far.write_str("stray bytes").unwrap();

        assert_eq!(link.debug_dump().unwrap(), "stray bytes");
        assert_eq!(link.stream_mut().available().unwrap(), 0);
    }

    #[test]
    fn raw_send_passthroughs() {
        let (mut link, mut far) = test_link();
        link.send_command("custom").unwrap();
        link.send_command_value("custom", "v").unwrap();
        link.send_data("payload").unwrap();
        assert_eq!(drain(&mut far), "custom\ncustom v\npayload\n");
    }
}
