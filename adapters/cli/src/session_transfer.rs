use std::{error::Error, fmt};

use base64::{engine::general_purpose::STANDARD_NO_PAD, Engine as _};
use ninja_puzzles_core::{GameKind, SessionSnapshot};
use serde::{Deserialize, Serialize};

const TRANSFER_DOMAIN: &str = "ninja";
const TRANSFER_VERSION: &str = "v1";

/// Identifier prefix emitted before the game label and encoded payload.
pub(crate) const TRANSFER_HEADER: &str = "ninja:v1";
/// Delimiter used to separate the prefix, game label and payload.
const FIELD_DELIMITER: char = ':';

/// Session progress captured for resuming a playthrough later.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct SessionTransfer {
    /// Game the session belongs to.
    pub(crate) game: GameKind,
    /// Seed the session shuffles derive from.
    pub(crate) seed: u64,
    /// Session state at the time of the export.
    pub(crate) session: SessionSnapshot,
}

impl SessionTransfer {
    /// Encodes the transfer into a single-line string suitable for copy and paste.
    pub(crate) fn encode(&self) -> Result<String, TransferError> {
        let payload = SerializablePayload {
            seed: self.seed,
            session: self.session,
        };
        let json = serde_json::to_vec(&payload)
            .map_err(TransferError::InvalidPayload)?;
        let encoded = STANDARD_NO_PAD.encode(json);
        Ok(format!("{TRANSFER_HEADER}:{}:{encoded}", self.game.label()))
    }

    /// Decodes a transfer from the provided string representation.
    pub(crate) fn decode(value: &str) -> Result<Self, TransferError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(TransferError::EmptyPayload);
        }

        let mut parts = trimmed.split(FIELD_DELIMITER);
        let domain = parts.next().ok_or(TransferError::MissingPrefix)?;
        let version = parts.next().ok_or(TransferError::MissingVersion)?;
        let game = parts.next().ok_or(TransferError::MissingGame)?;
        let payload = parts.next().ok_or(TransferError::MissingPayload)?;

        if domain != TRANSFER_DOMAIN {
            return Err(TransferError::InvalidPrefix(domain.to_owned()));
        }
        if version != TRANSFER_VERSION {
            return Err(TransferError::UnsupportedVersion(version.to_owned()));
        }
        if parts.next().is_some() {
            return Err(TransferError::TrailingFields);
        }

        let game = GameKind::from_label(game)
            .ok_or_else(|| TransferError::UnknownGame(game.to_owned()))?;
        let bytes = STANDARD_NO_PAD
            .decode(payload.as_bytes())
            .map_err(TransferError::InvalidEncoding)?;
        let decoded: SerializablePayload = serde_json::from_slice(&bytes)
            .map_err(TransferError::InvalidPayload)?;

        Ok(Self {
            game,
            seed: decoded.seed,
            session: decoded.session,
        })
    }
}

#[derive(Serialize, Deserialize)]
struct SerializablePayload {
    seed: u64,
    session: SessionSnapshot,
}

/// Errors that can occur while encoding or decoding session transfer strings.
#[derive(Debug)]
pub(crate) enum TransferError {
    /// The provided string was empty or contained only whitespace.
    EmptyPayload,
    /// The prefix segment was missing from the transfer string.
    MissingPrefix,
    /// The transfer string did not contain a version segment.
    MissingVersion,
    /// The transfer string did not name a game.
    MissingGame,
    /// The transfer string did not include the payload segment.
    MissingPayload,
    /// The transfer string carried segments after the payload.
    TrailingFields,
    /// The transfer string used an unexpected prefix segment.
    InvalidPrefix(String),
    /// The transfer string used an unsupported version identifier.
    UnsupportedVersion(String),
    /// The game label did not name a known game.
    UnknownGame(String),
    /// The base64 payload could not be decoded.
    InvalidEncoding(base64::DecodeError),
    /// The payload could not be serialised or deserialised.
    InvalidPayload(serde_json::Error),
}

impl fmt::Display for TransferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPayload => write!(f, "session code was empty"),
            Self::MissingPrefix => write!(f, "session code is missing the prefix"),
            Self::MissingVersion => write!(f, "session code is missing the version"),
            Self::MissingGame => write!(f, "session code is missing the game"),
            Self::MissingPayload => write!(f, "session code is missing the payload"),
            Self::TrailingFields => write!(f, "session code has unexpected trailing fields"),
            Self::InvalidPrefix(prefix) => {
                write!(f, "session code prefix '{prefix}' is not supported")
            }
            Self::UnsupportedVersion(version) => {
                write!(f, "session code version '{version}' is not supported")
            }
            Self::UnknownGame(game) => write!(f, "session code names unknown game '{game}'"),
            Self::InvalidEncoding(error) => {
                write!(f, "could not decode session payload: {error}")
            }
            Self::InvalidPayload(error) => {
                write!(f, "could not parse session payload: {error}")
            }
        }
    }
}

impl Error for TransferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidEncoding(error) => Some(error),
            Self::InvalidPayload(error) => Some(error),
            _ => None,
        }
    }
}
