//! Canned service documents and a scripted transport for tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use url::Url;

use crate::error::FetchError;
use crate::transport::{Transport, TransportResponse};

pub(crate) const LOGIN_OK: &str = r#"<?xml version="1.0" encoding="utf-8" ?>
<QRZDatabase version="1.34" xmlns="http://xmldata.qrz.com">
  <Session>
    <Key>2331uf894c4bd29f3923f3bacf02c532d7bd9</Key>
    <Count>123</Count>
    <SubExp>Wed Jan 1 12:34:03 2031</SubExp>
    <GMTime>Sun Aug 16 03:51:47 2020</GMTime>
  </Session>
</QRZDatabase>
"#;

pub(crate) const LOGIN_BAD_PASSWORD: &str = r#"<?xml version="1.0" encoding="utf-8" ?>
<QRZDatabase version="1.34" xmlns="http://xmldata.qrz.com">
  <Session>
    <Error>Username/password incorrect </Error>
    <GMTime>Sun Aug 16 03:51:47 2020</GMTime>
  </Session>
</QRZDatabase>
"#;

pub(crate) const CALLSIGN_W1AW: &str = r#"<?xml version="1.0" encoding="utf-8" ?>
<QRZDatabase version="1.34" xmlns="http://xmldata.qrz.com">
  <Callsign>
    <call>W1AW</call>
    <xref>W1AW</xref>
    <dxcc>291</dxcc>
    <fname>ARRL HQ OPERATORS</fname>
    <name>CLUB</name>
    <addr1>225 MAIN ST</addr1>
    <addr2>NEWINGTON</addr2>
    <state>CT</state>
    <zip>06111</zip>
    <country>United States</country>
    <lat>41.714775</lat>
    <lon>-72.727260</lon>
    <grid>FN31pr</grid>
    <county>Hartford</county>
    <class>C</class>
    <u_views>185333</u_views>
    <GMTOffset>-5</GMTOffset>
    <cqzone>5</cqzone>
    <ituzone>8</ituzone>
    <lotw>1</lotw>
    <name_fmt>ARRL HQ OPERATORS CLUB</name_fmt>
  </Callsign>
  <Session>
    <Key>2331uf894c4bd29f3923f3bacf02c532d7bd9</Key>
    <Count>124</Count>
    <SubExp>Wed Jan 1 12:34:03 2031</SubExp>
  </Session>
</QRZDatabase>
"#;

pub(crate) const CALLSIGN_W5YI: &str = r#"<?xml version="1.0" encoding="utf-8" ?>
<QRZDatabase version="1.34" xmlns="http://xmldata.qrz.com">
  <Callsign>
    <call>W5YI</call>
    <fname>FRED</fname>
    <name>MAIA</name>
    <addr2>DALLAS</addr2>
    <state>TX</state>
  </Callsign>
  <Session>
    <Key>2331uf894c4bd29f3923f3bacf02c532d7bd9</Key>
  </Session>
</QRZDatabase>
"#;

pub(crate) const DXCC_291: &str = r#"<?xml version="1.0" encoding="utf-8" ?>
<QRZDatabase version="1.34" xmlns="http://xmldata.qrz.com">
  <DXCC>
    <dxcc>291</dxcc>
    <cc>US</cc>
    <ccc>USA</ccc>
    <name>United States</name>
    <continent>NA</continent>
    <ituzone>6</ituzone>
    <cqzone>3</cqzone>
    <timezone>-5</timezone>
    <lat>37.701207</lat>
    <lon>-97.316895</lon>
  </DXCC>
  <Session>
    <Key>2331uf894c4bd29f3923f3bacf02c532d7bd9</Key>
  </Session>
</QRZDatabase>
"#;

pub(crate) const SESSION_TIMEOUT: &str = r#"<?xml version="1.0" encoding="utf-8" ?>
<QRZDatabase version="1.34" xmlns="http://xmldata.qrz.com">
  <Session>
    <Error>Session Timeout</Error>
  </Session>
</QRZDatabase>
"#;

pub(crate) const INVALID_SESSION_KEY: &str = r#"<?xml version="1.0" encoding="utf-8" ?>
<QRZDatabase version="1.34" xmlns="http://xmldata.qrz.com">
  <Session>
    <Error>Invalid session key</Error>
  </Session>
</QRZDatabase>
"#;

pub(crate) const NOT_FOUND: &str = r#"<?xml version="1.0" encoding="utf-8" ?>
<QRZDatabase version="1.34" xmlns="http://xmldata.qrz.com">
  <Session>
    <Error>Not found: XX1XX</Error>
    <Key>2331uf894c4bd29f3923f3bacf02c532d7bd9</Key>
  </Session>
</QRZDatabase>
"#;

pub(crate) const NO_SESSION: &str = r#"<?xml version="1.0" encoding="utf-8" ?>
<QRZDatabase version="1.34">
  <Callsign><call>W1AW</call></Callsign>
</QRZDatabase>
"#;

pub(crate) const WRONG_ROOT: &str = r#"<?xml version="1.0" encoding="utf-8" ?>
<Database><Session><Key>abc</Key></Session></Database>
"#;

pub(crate) const BIO_HTML: &str = "<html><body><p>W1AW is the ARRL station.</p></body></html>";

/// Replays canned responses in order and records every requested URL.
#[derive(Default, Clone)]
pub(crate) struct ScriptedTransport {
    responses: Arc<Mutex<VecDeque<TransportResponse>>>,
    requests: Arc<Mutex<Vec<Url>>>,
}

impl ScriptedTransport {
    pub(crate) fn new(responses: &[TransportResponse]) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses.iter().cloned().collect())),
            requests: Arc::default(),
        }
    }

    pub(crate) fn requests(&self) -> Vec<Url> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn param(url: &Url, name: &str) -> Option<String> {
        url.query_pairs()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.into_owned())
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn get(&self, url: &Url) -> Result<TransportResponse, FetchError> {
        self.requests.lock().unwrap().push(url.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| FetchError::InvalidResponse("script exhausted".to_string()))
    }
}
