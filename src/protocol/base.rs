//! # Base Protocol Dictionary
//!
//! The RFC 6733 base catalog as schema data: AVP definitions, the six base
//! commands, well-known enumerations and the stock dispatch registry.
//!
//! Nothing in this module is engine logic. It is the data the codec in
//! [`protocol::codec`](crate::protocol::codec) consumes — applications
//! layering their own interfaces on top build dictionaries of exactly this
//! shape for their own AVPs and commands.
//!
//! The registry registers the exact commands first and the generic
//! request/answer alternatives last, so an unrecognized command code decodes
//! into a generic message (common routing AVPs in declared slots, everything
//! else in the catch-all) instead of failing.

use std::sync::{Arc, OnceLock};

use crate::core::avp::AvpFlags;
use crate::protocol::message::AvpValue;
use crate::protocol::registry::Registry;
use crate::protocol::schema::{AvpDef, GroupSchema, MessageSchema, ValueKind};

/// Command codes of the base protocol.
pub mod command {
    /// CER / CEA.
    pub const CAPABILITIES_EXCHANGE: u32 = 257;
    /// DWR / DWA.
    pub const DEVICE_WATCHDOG: u32 = 280;
    /// DPR / DPA.
    pub const DISCONNECT_PEER: u32 = 282;
}

/// IANA enterprise numbers seen in AAA deployments.
pub mod vendor {
    pub const NONE: u32 = 0;
    /// Hewlett Packard
    pub const HP: u32 = 11;
    /// Sun Microsystems, Inc.
    pub const SUN: u32 = 42;
    /// Merit Networks
    pub const MERIT: u32 = 61;
    pub const ERICSSON: u32 = 193;
    /// 3GPP2
    pub const TGPP2: u32 = 5535;
    /// 3GPP
    pub const TGPP: u32 = 10415;
    pub const VODAFONE: u32 = 12645;
    pub const ETSI: u32 = 13019;
    pub const NOKIA: u32 = 28458;
    /// 3GPP Cx/Dx
    pub const TGPP_CXDX: u32 = 16777216;
    /// 3GPP Sh
    pub const TGPP_SH: u32 = 16777217;
}

/// Application ids of the 3GPP reference points (Auth-Application-Id /
/// Acct-Application-Id value space).
pub mod app {
    pub const NONE: u32 = 0;
    /// TS 29.228/29.229
    pub const CXDX: u32 = 16777216;
    /// TS 29.328/29.329
    pub const SHPH: u32 = 16777217;
    /// TS 32.296
    pub const RE: u32 = 16777218;
    /// TS 29.234
    pub const WX: u32 = 16777219;
    /// TS 29.109
    pub const ZN: u32 = 16777220;
    /// TS 29.109
    pub const ZH: u32 = 16777221;
    /// TS 29.209
    pub const GQ: u32 = 16777222;
    /// TS 29.061
    pub const GMB: u32 = 16777223;
    /// TS 29.210
    pub const GX_OVER_GY: u32 = 16777225;
    /// TS 29.140
    pub const MM10: u32 = 16777226;
    /// TS 29.234
    pub const PR: u32 = 16777230;
    /// TS 29.214
    pub const RX: u32 = 16777236;
    /// TS 29.212
    pub const GX: u32 = 16777238;
    /// TS 29.273
    pub const STA: u32 = 16777250;
    /// TS 29.272
    pub const S6A: u32 = 16777251;
    /// TS 29.272
    pub const S13: u32 = 16777252;
    /// TS 29.172
    pub const SLG: u32 = 16777255;
    /// TS 29.273
    pub const SWM: u32 = 16777264;
    /// TS 29.273
    pub const SWX: u32 = 16777265;
    /// TS 29.212
    pub const GXX: u32 = 16777266;
    /// TS 29.215
    pub const S9: u32 = 16777267;
    /// TS 29.109
    pub const ZPN: u32 = 16777268;
    /// TS 29.273
    pub const S6B: u32 = 16777272;
    /// TS 29.173
    pub const SLH: u32 = 16777291;
    /// TS 29.061
    pub const SGMB: u32 = 16777292;
    /// TS 29.219
    pub const SY: u32 = 16777302;
    /// TS 29.212
    pub const SD: u32 = 16777303;
    /// TS 29.272
    pub const S7A: u32 = 16777308;
    /// TS 29.368
    pub const TSP: u32 = 16777309;
    /// TS 29.336
    pub const S6M: u32 = 16777310;
    /// TS 29.337
    pub const T4: u32 = 16777311;
    /// TS 29.338
    pub const S6C: u32 = 16777312;
    /// TS 29.338
    pub const SGD: u32 = 16777313;
    /// TS 29.212
    pub const S15: u32 = 16777318;
    /// TS 29.215
    pub const S9A: u32 = 16777319;
    /// TS 29.215
    pub const S9A_STAR: u32 = 16777320;
    /// TS 29.468
    pub const MB2_C: u32 = 16777335;
    /// TS 29.344
    pub const PC4A: u32 = 16777336;
    /// TS 29.343
    pub const PC2: u32 = 16777337;
    /// TS 29.345
    pub const PC6_PC7: u32 = 16777340;
}

/// Experimental-Result-Code values (3GPP Cx/Dx, S6a and Rx spaces).
pub mod experimental {
    pub const FIRST_REGISTRATION: u32 = 2001;
    pub const SUBSEQUENT_REGISTRATION: u32 = 2002;
    pub const UNREGISTERED_SERVICE: u32 = 2003;
    pub const SUCCESS_SERVER_NAME_NOT_STORED: u32 = 2004;
    pub const AUTHENTICATION_DATA_UNAVAILABLE: u32 = 4181;
    pub const ERROR_CAMEL_SUBSCRIPTION_PRESENT: u32 = 4182;
    pub const ERROR_USER_UNKNOWN: u32 = 5001;
    pub const ERROR_IDENTITIES_DONT_MATCH: u32 = 5002;
    pub const ERROR_IDENTITY_NOT_REGISTERED: u32 = 5003;
    pub const ERROR_ROAMING_NOT_ALLOWED: u32 = 5004;
    pub const ERROR_IDENTITY_ALREADY_REGISTERED: u32 = 5005;
    pub const ERROR_AUTH_SCHEME_NOT_SUPPORTED: u32 = 5006;
    pub const ERROR_IN_ASSIGNMENT_TYPE: u32 = 5007;
    pub const ERROR_TOO_MUCH_DATA: u32 = 5008;
    pub const ERROR_NOT_SUPPORTED_USER_DATA: u32 = 5009;
    pub const ERROR_FEATURE_UNSUPPORTED: u32 = 5011;
    pub const ERROR_SERVING_NODE_FEATURE_UNSUPPORTED: u32 = 5012;
    pub const ERROR_UNKNOWN_EPS_SUBSCRIPTION: u32 = 5420;
    pub const ERROR_RAT_NOT_ALLOWED: u32 = 5421;
    pub const ERROR_EQUIPMENT_UNKNOWN: u32 = 5422;
    pub const ERROR_UNKNOWN_SERVING_NODE: u32 = 5423;
    pub const ERROR_INVALID_SERVICE_INFORMATION: u32 = 5061;
    pub const ERROR_FILTER_RESTRICTIONS: u32 = 5062;
    pub const ERROR_REQUESTED_SERVICE_NOT_AUTHORIZED: u32 = 5063;
    pub const ERROR_DUPLICATED_AF_SESSION: u32 = 5064;
    pub const ERROR_IPCAN_SESSION_NOT_AVAILABLE: u32 = 5065;
    pub const ERROR_UNAUTHORIZED_NON_EMERGENCY_SESSION: u32 = 5066;
    pub const ERROR_UNAUTHORIZED_SPONSORED_DATA_CONNECTIVITY: u32 = 5067;
    pub const ERROR_TEMPORARY_NETWORK_FAILURE: u32 = 5068;
}

/// Result-Code values (RFC 6733 §7.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ResultCode {
    // Informational
    MultiRoundAuth = 1001,
    // Success
    Success = 2001,
    LimitedSuccess = 2002,
    // Protocol errors
    CommandUnsupported = 3001,
    UnableToDeliver = 3002,
    RealmNotServed = 3003,
    TooBusy = 3004,
    LoopDetected = 3005,
    RedirectIndication = 3006,
    ApplicationUnsupported = 3007,
    InvalidHdrBits = 3008,
    InvalidAvpBits = 3009,
    UnknownPeer = 3010,
    // Transient failures
    AuthenticationRejected = 4001,
    OutOfSpace = 4002,
    ElectionLost = 4003,
    // Permanent failures
    AvpUnsupported = 5001,
    UnknownSessionId = 5002,
    AuthorizationRejected = 5003,
    InvalidAvpValue = 5004,
    MissingAvp = 5005,
    ResourcesExceeded = 5006,
    ContradictingAvps = 5007,
    AvpNotAllowed = 5008,
    AvpOccursTooManyTimes = 5009,
    NoCommonApplication = 5010,
    UnsupportedVersion = 5011,
    UnableToComply = 5012,
    InvalidBitInHeader = 5013,
    InvalidAvpLength = 5014,
    InvalidMessageLength = 5015,
    InvalidAvpBitCombo = 5016,
    NoCommonSecurity = 5017,
    DuplicatedAfSession = 5064,
    IpCanSessionNotAvailable = 5065,
}

impl ResultCode {
    /// True for the result classes a peer treats as acceptance.
    pub fn is_accepted(self) -> bool {
        matches!(self, ResultCode::Success | ResultCode::LimitedSuccess)
    }
}

/// Disconnect-Cause values (RFC 6733 §5.4.3).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum DisconnectCause {
    Rebooting = 0,
    Busy = 1,
    DoNotWantToTalkToYou = 2,
}

/// Termination-Cause values (RFC 6733 §8.15).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum TerminationCause {
    Logout = 1,
    ServiceNotProvided = 2,
    BadAnswer = 3,
    Administrative = 4,
    LinkBroken = 5,
    AuthExpired = 6,
    UserMoved = 7,
    SessionTimeout = 8,
}

/// Auth-Session-State values (RFC 6733 §8.11).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum AuthSessionState {
    StateMaintained = 0,
    NoStateMaintained = 1,
}

/// Re-Auth-Request-Type values (RFC 6733 §8.12).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ReAuthRequestType {
    AuthorizeOnly = 0,
    AuthorizeAuthenticate = 1,
}

/// Redirect-Host-Usage values (RFC 6733 §6.13).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum RedirectHostUsage {
    DontCache = 0,
    AllSession = 1,
    AllRealm = 2,
    RealmAndApplication = 3,
    AllApplication = 4,
    AllHost = 5,
    AllUser = 6,
}

/// Accounting-Record-Type values (RFC 6733 §9.8.1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum AcctRecordType {
    EventRecord = 1,
    StartRecord = 2,
    InterimRecord = 3,
    StopRecord = 4,
}

/// Accounting-Realtime-Required values (RFC 6733 §9.8.7).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum AcctRealtimeRequired {
    DeliverAndGrant = 1,
    GrantAndStore = 2,
    GrantAndLose = 3,
}

macro_rules! enumerated_value {
    ($($name:ident),+ $(,)?) => {
        $(impl From<$name> for AvpValue {
            fn from(v: $name) -> Self {
                AvpValue::Enumerated(v as u32)
            }
        })+
    };
}

enumerated_value!(
    ResultCode,
    DisconnectCause,
    TerminationCause,
    AuthSessionState,
    ReAuthRequestType,
    RedirectHostUsage,
    AcctRecordType,
    AcctRealtimeRequired,
);

/// Formats a Session-Id per RFC 6733 §8.8:
/// `<DiameterIdentity>;<high 32 bits>;<low 32 bits>[;<optional value>]`.
pub fn format_session_id(identity: &str, high: u32, low: u32, optional: Option<&str>) -> String {
    match optional {
        Some(tail) if !tail.is_empty() => format!("{identity};{high};{low};{tail}"),
        _ => format!("{identity};{high};{low}"),
    }
}

/// Every base AVP definition, the six command schemas, the generic
/// fallbacks and the assembled registry. Built once via [`dictionary`].
#[derive(Debug)]
pub struct BaseDictionary {
    pub user_name: Arc<AvpDef>,
    pub class_attr: Arc<AvpDef>,
    pub proxy_state: Arc<AvpDef>,
    pub acct_session_id: Arc<AvpDef>,
    pub acct_multi_session_id: Arc<AvpDef>,
    pub event_timestamp: Arc<AvpDef>,
    pub acct_interim_interval: Arc<AvpDef>,
    pub host_ip_address: Arc<AvpDef>,
    pub auth_application_id: Arc<AvpDef>,
    pub acct_application_id: Arc<AvpDef>,
    pub vendor_specific_application_id: Arc<AvpDef>,
    pub redirect_host_usage: Arc<AvpDef>,
    pub redirect_max_cache_time: Arc<AvpDef>,
    pub session_id: Arc<AvpDef>,
    pub origin_host: Arc<AvpDef>,
    pub supported_vendor_id: Arc<AvpDef>,
    pub vendor_id: Arc<AvpDef>,
    pub firmware_revision: Arc<AvpDef>,
    pub result_code: Arc<AvpDef>,
    pub product_name: Arc<AvpDef>,
    pub disconnect_cause: Arc<AvpDef>,
    pub auth_session_state: Arc<AvpDef>,
    pub origin_state_id: Arc<AvpDef>,
    pub failed_avp: Arc<AvpDef>,
    pub proxy_host: Arc<AvpDef>,
    pub error_message: Arc<AvpDef>,
    pub route_record: Arc<AvpDef>,
    pub destination_realm: Arc<AvpDef>,
    pub proxy_info: Arc<AvpDef>,
    pub re_auth_request_type: Arc<AvpDef>,
    pub acct_sub_session_id: Arc<AvpDef>,
    pub redirect_host: Arc<AvpDef>,
    pub destination_host: Arc<AvpDef>,
    pub error_reporting_host: Arc<AvpDef>,
    pub termination_cause: Arc<AvpDef>,
    pub origin_realm: Arc<AvpDef>,
    pub experimental_result: Arc<AvpDef>,
    pub experimental_result_code: Arc<AvpDef>,
    pub inband_security_id: Arc<AvpDef>,
    pub acct_record_type: Arc<AvpDef>,
    pub acct_realtime_required: Arc<AvpDef>,
    pub acct_record_number: Arc<AvpDef>,

    pub cer: Arc<MessageSchema>,
    pub cea: Arc<MessageSchema>,
    pub dpr: Arc<MessageSchema>,
    pub dpa: Arc<MessageSchema>,
    pub dwr: Arc<MessageSchema>,
    pub dwa: Arc<MessageSchema>,
    pub generic_request: Arc<MessageSchema>,
    pub generic_answer: Arc<MessageSchema>,

    pub registry: Registry,
}

fn mandatory(name: &'static str, code: u32, kind: ValueKind) -> Arc<AvpDef> {
    Arc::new(AvpDef::new(name, code, kind).with_flags(AvpFlags::MANDATORY))
}

fn plain(name: &'static str, code: u32, kind: ValueKind) -> Arc<AvpDef> {
    Arc::new(AvpDef::new(name, code, kind))
}

impl BaseDictionary {
    fn new() -> Self {
        use ValueKind::*;

        let user_name = mandatory("User-Name", 1, Text);
        let class_attr = mandatory("Class", 25, Octets);
        let proxy_state = mandatory("Proxy-State", 33, Octets);
        let acct_session_id = mandatory("Acct-Session-Id", 44, Octets);
        let acct_multi_session_id = plain("Acct-Multi-Session-Id", 50, Text);
        let event_timestamp = mandatory("Event-Timestamp", 55, Time);
        let acct_interim_interval = mandatory("Acct-Interim-Interval", 85, Unsigned32);
        let host_ip_address = mandatory("Host-IP-Address", 257, Address);
        let auth_application_id = mandatory("Auth-Application-Id", 258, Enumerated);
        let acct_application_id = mandatory("Acct-Application-Id", 259, Enumerated);
        let redirect_host_usage = mandatory("Redirect-Host-Usage", 261, Enumerated);
        let redirect_max_cache_time = mandatory("Redirect-Max-Cache-Time", 262, Unsigned32);
        let session_id = mandatory("Session-Id", 263, Text);
        let origin_host = mandatory("Origin-Host", 264, Text);
        let supported_vendor_id = mandatory("Supported-Vendor-Id", 265, Enumerated);
        let vendor_id = mandatory("Vendor-Id", 266, Enumerated);
        let firmware_revision = plain("Firmware-Revision", 267, Unsigned32);
        let result_code = mandatory("Result-Code", 268, Enumerated);
        let product_name = plain("Product-Name", 269, Text);
        let disconnect_cause = mandatory("Disconnect-Cause", 273, Enumerated);
        let auth_session_state = mandatory("Auth-Session-State", 277, Enumerated);
        let origin_state_id = mandatory("Origin-State-Id", 278, Unsigned32);
        let failed_avp = mandatory("Failed-AVP", 279, Octets);
        let proxy_host = mandatory("Proxy-Host", 280, Text);
        let error_message = plain("Error-Message", 281, Text);
        let route_record = mandatory("Route-Record", 282, Text);
        let destination_realm = mandatory("Destination-Realm", 283, Text);
        let re_auth_request_type = mandatory("Re-Auth-Request-Type", 285, Enumerated);
        let acct_sub_session_id = mandatory("Acct-Sub-Session-Id", 287, Unsigned64);
        let redirect_host = mandatory("Redirect-Host", 292, Text);
        let destination_host = mandatory("Destination-Host", 293, Text);
        let error_reporting_host = plain("Error-Reporting-Host", 294, Text);
        let termination_cause = mandatory("Termination-Cause", 295, Enumerated);
        let origin_realm = mandatory("Origin-Realm", 296, Text);
        let experimental_result_code = mandatory("Experimental-Result-Code", 298, Enumerated);
        let inband_security_id = mandatory("Inband-Security-Id", 299, Unsigned32);
        let acct_record_type = mandatory("Acct-Record-Type", 480, Enumerated);
        let acct_realtime_required = mandatory("Acct-Realtime-Required", 483, Enumerated);
        let acct_record_number = mandatory("Acct-Record-Number", 485, Unsigned32);

        let vendor_specific_application_id = Arc::new(
            AvpDef::grouped(
                "Vendor-Specific-Application-Id",
                260,
                GroupSchema::build()
                    .mandatory_many(&vendor_id)
                    .optional(&auth_application_id)
                    .optional(&acct_application_id)
                    .finish(),
            )
            .with_flags(AvpFlags::MANDATORY),
        );
        let proxy_info = Arc::new(
            AvpDef::grouped(
                "Proxy-Info",
                284,
                GroupSchema::build()
                    .mandatory(&proxy_host)
                    .mandatory(&proxy_state)
                    .finish(),
            )
            .with_flags(AvpFlags::MANDATORY),
        );
        let experimental_result = Arc::new(
            AvpDef::grouped(
                "Experimental-Result",
                297,
                GroupSchema::build()
                    .mandatory(&vendor_id)
                    .mandatory(&experimental_result_code)
                    .finish(),
            )
            .with_flags(AvpFlags::MANDATORY),
        );

        // <CER> ::= < Diameter Header: 257, REQ >
        let cer = MessageSchema::request(
            "Capabilities-Exchange-Request",
            command::CAPABILITIES_EXCHANGE,
            GroupSchema::build()
                .mandatory(&origin_host)
                .mandatory(&origin_realm)
                .mandatory_many(&host_ip_address)
                .mandatory(&vendor_id)
                .mandatory(&product_name)
                .optional(&origin_state_id)
                .optional_many(&supported_vendor_id)
                .optional_many(&auth_application_id)
                .optional_many(&inband_security_id)
                .optional_many(&acct_application_id)
                .optional_many(&vendor_specific_application_id)
                .optional(&firmware_revision)
                .finish(),
        );

        // <CEA> ::= < Diameter Header: 257 >
        let cea = MessageSchema::answer(
            "Capabilities-Exchange-Answer",
            command::CAPABILITIES_EXCHANGE,
            GroupSchema::build()
                .mandatory(&result_code)
                .mandatory(&origin_host)
                .mandatory(&origin_realm)
                .mandatory_many(&host_ip_address)
                .mandatory(&vendor_id)
                .mandatory(&product_name)
                .optional(&origin_state_id)
                .optional(&error_message)
                .optional_many(&failed_avp)
                .optional_many(&supported_vendor_id)
                .optional_many(&auth_application_id)
                .optional_many(&inband_security_id)
                .optional_many(&acct_application_id)
                .optional_many(&vendor_specific_application_id)
                .optional(&firmware_revision)
                .finish(),
        );

        // <DPR> ::= < Diameter Header: 282, REQ >
        let dpr = MessageSchema::request(
            "Disconnect-Peer-Request",
            command::DISCONNECT_PEER,
            GroupSchema::build()
                .mandatory(&origin_host)
                .mandatory(&origin_realm)
                .mandatory(&disconnect_cause)
                .finish(),
        );

        // <DPA> ::= < Diameter Header: 282 >
        let dpa = MessageSchema::answer(
            "Disconnect-Peer-Answer",
            command::DISCONNECT_PEER,
            GroupSchema::build()
                .mandatory(&result_code)
                .mandatory(&origin_host)
                .mandatory(&origin_realm)
                .optional(&error_message)
                .optional_many(&failed_avp)
                .finish(),
        );

        // <DWR> ::= < Diameter Header: 280, REQ >
        let dwr = MessageSchema::request(
            "Device-Watchdog-Request",
            command::DEVICE_WATCHDOG,
            GroupSchema::build()
                .mandatory(&origin_host)
                .mandatory(&origin_realm)
                .optional(&origin_state_id)
                .finish(),
        );

        // <DWA> ::= < Diameter Header: 280 >
        let dwa = MessageSchema::answer(
            "Device-Watchdog-Answer",
            command::DEVICE_WATCHDOG,
            GroupSchema::build()
                .mandatory(&result_code)
                .mandatory(&origin_host)
                .mandatory(&origin_realm)
                .optional(&error_message)
                .optional_many(&failed_avp)
                .optional(&origin_state_id)
                .finish(),
        );

        // Fallbacks for commands outside the base grammar: the routing AVPs
        // every command may carry stay addressable, the rest is caught raw.
        let generic_request = MessageSchema::request(
            "Generic-Request",
            0,
            GroupSchema::build()
                .optional(&session_id)
                .optional(&origin_host)
                .optional(&origin_realm)
                .optional(&destination_host)
                .optional(&destination_realm)
                .optional_many(&route_record)
                .optional_many(&proxy_info)
                .finish(),
        );
        let generic_answer = MessageSchema::answer(
            "Generic-Answer",
            0,
            GroupSchema::build()
                .optional(&session_id)
                .optional(&result_code)
                .optional(&origin_host)
                .optional(&origin_realm)
                .optional(&error_message)
                .optional(&error_reporting_host)
                .optional_many(&failed_avp)
                .optional_many(&proxy_info)
                .finish(),
        );

        let registry = Registry::builder()
            .message(&cer)
            .message(&cea)
            .message(&dpr)
            .message(&dpa)
            .message(&dwr)
            .message(&dwa)
            .any_request(&generic_request)
            .any_answer(&generic_answer)
            .build()
            .expect("base registry order is fixed");

        Self {
            user_name,
            class_attr,
            proxy_state,
            acct_session_id,
            acct_multi_session_id,
            event_timestamp,
            acct_interim_interval,
            host_ip_address,
            auth_application_id,
            acct_application_id,
            vendor_specific_application_id,
            redirect_host_usage,
            redirect_max_cache_time,
            session_id,
            origin_host,
            supported_vendor_id,
            vendor_id,
            firmware_revision,
            result_code,
            product_name,
            disconnect_cause,
            auth_session_state,
            origin_state_id,
            failed_avp,
            proxy_host,
            error_message,
            route_record,
            destination_realm,
            proxy_info,
            re_auth_request_type,
            acct_sub_session_id,
            redirect_host,
            destination_host,
            error_reporting_host,
            termination_cause,
            origin_realm,
            experimental_result,
            experimental_result_code,
            inband_security_id,
            acct_record_type,
            acct_realtime_required,
            acct_record_number,
            cer,
            cea,
            dpr,
            dpa,
            dwr,
            dwa,
            generic_request,
            generic_answer,
            registry,
        }
    }
}

/// The base dictionary, built on first use and shared for the process
/// lifetime. Read-only, safe across threads.
pub fn dictionary() -> &'static BaseDictionary {
    static DICTIONARY: OnceLock<BaseDictionary> = OnceLock::new();
    DICTIONARY.get_or_init(BaseDictionary::new)
}

/// The stock dispatch registry for the base protocol.
pub fn registry() -> &'static Registry {
    &dictionary().registry
}
