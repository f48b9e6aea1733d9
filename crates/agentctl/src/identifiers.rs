//! Agent control identifier registry
//!
//! The complete set of identifiers emitted by the IDL compiler for the
//! Microsoft Agent control: one IID per scripting interface, the event
//! source dispinterface, the type library, and the coclass. Values are the
//! vendor's and must stay bit-exact; an external activation mechanism
//! resolves components by these bytes.

use std::fmt;

use crate::error::{AgentCtlError, Result};
use crate::guid::Guid;

pub const IID_AGENT_CTL_REQUEST: Guid = Guid::new(
    0x1DAB85C3,
    0x803A,
    0x11D0,
    [0xAC, 0x63, 0x00, 0xC0, 0x4F, 0xD9, 0x75, 0x75],
);

pub const IID_AGENT_CTL_USER_INPUT: Guid = Guid::new(
    0xC4ABF875,
    0x8100,
    0x11D0,
    [0xAC, 0x63, 0x00, 0xC0, 0x4F, 0xD9, 0x75, 0x75],
);

pub const IID_AGENT_CTL_BALLOON: Guid = Guid::new(
    0xF5BE8BD3,
    0x7DE6,
    0x11D0,
    [0x91, 0xFE, 0x00, 0xC0, 0x4F, 0xD7, 0x01, 0xA5],
);

pub const IID_AGENT_CTL_BALLOON_EX: Guid = Guid::new(
    0x822DB1C0,
    0x8879,
    0x11D1,
    [0x9E, 0xC6, 0x00, 0xC0, 0x4F, 0xD7, 0x08, 0x1F],
);

pub const IID_AGENT_CTL_COMMAND: Guid = Guid::new(
    0xF5BE8BE3,
    0x7DE6,
    0x11D0,
    [0x91, 0xFE, 0x00, 0xC0, 0x4F, 0xD7, 0x01, 0xA5],
);

pub const IID_AGENT_CTL_COMMAND_EX: Guid = Guid::new(
    0xB0913410,
    0x3B44,
    0x11D1,
    [0xAC, 0xBA, 0x00, 0xC0, 0x4F, 0xD9, 0x75, 0x75],
);

pub const IID_AGENT_CTL_COMMANDS: Guid = Guid::new(
    0xF5BE8BE1,
    0x7DE6,
    0x11D0,
    [0x91, 0xFE, 0x00, 0xC0, 0x4F, 0xD7, 0x01, 0xA5],
);

pub const IID_AGENT_CTL_COMMANDS_EX: Guid = Guid::new(
    0x6BA90C01,
    0x3910,
    0x11D1,
    [0xAC, 0xB3, 0x00, 0xC0, 0x4F, 0xD9, 0x75, 0x75],
);

pub const IID_AGENT_CTL_CHARACTER: Guid = Guid::new(
    0xF5BE8BD9,
    0x7DE6,
    0x11D0,
    [0x91, 0xFE, 0x00, 0xC0, 0x4F, 0xD7, 0x01, 0xA5],
);

pub const IID_AGENT_CTL_ANIMATION_NAMES: Guid = Guid::new(
    0x8B77181C,
    0xD3EF,
    0x11D1,
    [0x85, 0x00, 0x00, 0xC0, 0x4F, 0xA3, 0x4A, 0x14],
);

pub const IID_AGENT_CTL_CHARACTER_EX: Guid = Guid::new(
    0xDE8EF600,
    0x2F82,
    0x11D1,
    [0xAC, 0xAC, 0x00, 0xC0, 0x4F, 0xD9, 0x75, 0x75],
);

pub const IID_AGENT_CTL_CHARACTERS: Guid = Guid::new(
    0xF5BE8BE8,
    0x7DE6,
    0x11D0,
    [0x91, 0xFE, 0x00, 0xC0, 0x4F, 0xD7, 0x01, 0xA5],
);

pub const IID_AGENT_CTL_AUDIO_OBJECT: Guid = Guid::new(
    0xF5BE8BDB,
    0x7DE6,
    0x11D0,
    [0x91, 0xFE, 0x00, 0xC0, 0x4F, 0xD7, 0x01, 0xA5],
);

pub const IID_AGENT_CTL_AUDIO_OBJECT_EX: Guid = Guid::new(
    0xF5BE8BF0,
    0x7DE6,
    0x11D0,
    [0x91, 0xFE, 0x00, 0xC0, 0x4F, 0xD7, 0x01, 0xA5],
);

pub const IID_AGENT_CTL_SPEECH_INPUT: Guid = Guid::new(
    0xF5BE8BDD,
    0x7DE6,
    0x11D0,
    [0x91, 0xFE, 0x00, 0xC0, 0x4F, 0xD7, 0x01, 0xA5],
);

pub const IID_AGENT_CTL_PROPERTY_SHEET: Guid = Guid::new(
    0xF5BE8BDF,
    0x7DE6,
    0x11D0,
    [0x91, 0xFE, 0x00, 0xC0, 0x4F, 0xD7, 0x01, 0xA5],
);

pub const IID_AGENT_CTL_COMMANDS_WINDOW: Guid = Guid::new(
    0x6D0ECB27,
    0x9968,
    0x11D0,
    [0xAC, 0x6E, 0x00, 0xC0, 0x4F, 0xD9, 0x75, 0x75],
);

pub const IID_AGENT_CTL: Guid = Guid::new(
    0xF5BE8BD1,
    0x7DE6,
    0x11D0,
    [0x91, 0xFE, 0x00, 0xC0, 0x4F, 0xD7, 0x01, 0xA5],
);

pub const IID_AGENT_CTL_EX: Guid = Guid::new(
    0x8563FF20,
    0x8ECC,
    0x11D1,
    [0xB9, 0xB4, 0x00, 0xC0, 0x4F, 0xD9, 0x75, 0x75],
);

/// Type library of the Agent scripting object model
pub const LIBID_AGENT_OBJECTS: Guid = Guid::new(
    0xF5BE8BC2,
    0x7DE6,
    0x11D0,
    [0x91, 0xFE, 0x00, 0xC0, 0x4F, 0xD7, 0x01, 0xA5],
);

/// Event source dispinterface fired back at control hosts
pub const DIID_AGENT_EVENTS: Guid = Guid::new(
    0xF5BE8BD4,
    0x7DE6,
    0x11D0,
    [0x91, 0xFE, 0x00, 0xC0, 0x4F, 0xD7, 0x01, 0xA5],
);

/// The Agent control coclass
pub const CLSID_AGENT: Guid = Guid::new(
    0xD45FD31B,
    0x5C6E,
    0x11D1,
    [0x9E, 0xC1, 0x00, 0xC0, 0x4F, 0xD7, 0x08, 0x1F],
);

/// What kind of external entity an identifier names
///
/// Tags only; the identifier values themselves are structurally identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentifierRole {
    /// COM interface (IID)
    Interface,
    /// Event source dispinterface (DIID)
    EventSource,
    /// Coclass (CLSID)
    Class,
    /// Type library (LIBID)
    TypeLibrary,
}

impl fmt::Display for IdentifierRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Interface => "interface",
            Self::EventSource => "event source",
            Self::Class => "class",
            Self::TypeLibrary => "type library",
        };
        f.write_str(name)
    }
}

/// A named entry in the identifier table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownIdentifier {
    pub name: &'static str,
    pub role: IdentifierRole,
    pub guid: Guid,
}

/// Every identifier the IDL compiler emits for the Agent control,
/// in emission order
pub const KNOWN_IDENTIFIERS: &[KnownIdentifier] = &[
    KnownIdentifier {
        name: "IAgentCtlRequest",
        role: IdentifierRole::Interface,
        guid: IID_AGENT_CTL_REQUEST,
    },
    KnownIdentifier {
        name: "IAgentCtlUserInput",
        role: IdentifierRole::Interface,
        guid: IID_AGENT_CTL_USER_INPUT,
    },
    KnownIdentifier {
        name: "IAgentCtlBalloon",
        role: IdentifierRole::Interface,
        guid: IID_AGENT_CTL_BALLOON,
    },
    KnownIdentifier {
        name: "IAgentCtlBalloonEx",
        role: IdentifierRole::Interface,
        guid: IID_AGENT_CTL_BALLOON_EX,
    },
    KnownIdentifier {
        name: "IAgentCtlCommand",
        role: IdentifierRole::Interface,
        guid: IID_AGENT_CTL_COMMAND,
    },
    KnownIdentifier {
        name: "IAgentCtlCommandEx",
        role: IdentifierRole::Interface,
        guid: IID_AGENT_CTL_COMMAND_EX,
    },
    KnownIdentifier {
        name: "IAgentCtlCommands",
        role: IdentifierRole::Interface,
        guid: IID_AGENT_CTL_COMMANDS,
    },
    KnownIdentifier {
        name: "IAgentCtlCommandsEx",
        role: IdentifierRole::Interface,
        guid: IID_AGENT_CTL_COMMANDS_EX,
    },
    KnownIdentifier {
        name: "IAgentCtlCharacter",
        role: IdentifierRole::Interface,
        guid: IID_AGENT_CTL_CHARACTER,
    },
    KnownIdentifier {
        name: "IAgentCtlAnimationNames",
        role: IdentifierRole::Interface,
        guid: IID_AGENT_CTL_ANIMATION_NAMES,
    },
    KnownIdentifier {
        name: "IAgentCtlCharacterEx",
        role: IdentifierRole::Interface,
        guid: IID_AGENT_CTL_CHARACTER_EX,
    },
    KnownIdentifier {
        name: "IAgentCtlCharacters",
        role: IdentifierRole::Interface,
        guid: IID_AGENT_CTL_CHARACTERS,
    },
    KnownIdentifier {
        name: "IAgentCtlAudioObject",
        role: IdentifierRole::Interface,
        guid: IID_AGENT_CTL_AUDIO_OBJECT,
    },
    KnownIdentifier {
        name: "IAgentCtlAudioObjectEx",
        role: IdentifierRole::Interface,
        guid: IID_AGENT_CTL_AUDIO_OBJECT_EX,
    },
    KnownIdentifier {
        name: "IAgentCtlSpeechInput",
        role: IdentifierRole::Interface,
        guid: IID_AGENT_CTL_SPEECH_INPUT,
    },
    KnownIdentifier {
        name: "IAgentCtlPropertySheet",
        role: IdentifierRole::Interface,
        guid: IID_AGENT_CTL_PROPERTY_SHEET,
    },
    KnownIdentifier {
        name: "IAgentCtlCommandsWindow",
        role: IdentifierRole::Interface,
        guid: IID_AGENT_CTL_COMMANDS_WINDOW,
    },
    KnownIdentifier {
        name: "IAgentCtl",
        role: IdentifierRole::Interface,
        guid: IID_AGENT_CTL,
    },
    KnownIdentifier {
        name: "IAgentCtlEx",
        role: IdentifierRole::Interface,
        guid: IID_AGENT_CTL_EX,
    },
    KnownIdentifier {
        name: "AgentObjects",
        role: IdentifierRole::TypeLibrary,
        guid: LIBID_AGENT_OBJECTS,
    },
    KnownIdentifier {
        name: "_AgentEvents",
        role: IdentifierRole::EventSource,
        guid: DIID_AGENT_EVENTS,
    },
    KnownIdentifier {
        name: "Agent",
        role: IdentifierRole::Class,
        guid: CLSID_AGENT,
    },
];

/// Resolve an identifier by its IDL name
pub fn lookup(name: &str) -> Result<&'static KnownIdentifier> {
    KNOWN_IDENTIFIERS
        .iter()
        .find(|id| id.name == name)
        .ok_or_else(|| AgentCtlError::UnknownIdentifier(name.to_string()))
}

/// Reverse lookup: which known entity does this value name, if any
pub fn find_by_guid(guid: &Guid) -> Option<&'static KnownIdentifier> {
    KNOWN_IDENTIFIERS.iter().find(|id| id.guid == *guid)
}
