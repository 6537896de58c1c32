//! `IndirectParticipant` resource implementation.
//!
//! Direct Pix participants register the institutions that settle through
//! them as indirect participants. Pix requests and reversals aimed at an
//! indirect participant are forwarded to its callback URLs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::StarkClient;
use crate::rest::{operations, Resource, ResourceError};

/// An institution settling Pix through a direct participant.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IndirectParticipant {
    /// CPF or CNPJ of the participant.
    pub tax_id: String,

    /// Workspace of the participant.
    pub workspace_id: String,

    /// URL receiving Pix request authorizations.
    pub request_url: String,

    /// URL receiving Pix reversal authorizations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reversal_url: Option<String>,

    /// Unique id assigned by the server.
    #[serde(default, skip_serializing)]
    pub id: Option<String>,

    /// Organization of the direct participant.
    #[serde(default, skip_serializing)]
    pub organization_id: Option<String>,

    /// Id of the direct participant.
    #[serde(default, skip_serializing)]
    pub direct_id: Option<String>,

    /// Bank code (ISPB) assigned to the participant.
    #[serde(default, skip_serializing)]
    pub bank_code: Option<String>,

    /// Current status.
    #[serde(default, skip_serializing)]
    pub status: Option<String>,

    /// Latest update time.
    #[serde(
        default,
        skip_serializing,
        deserialize_with = "crate::rest::datetime::deserialize_option"
    )]
    pub updated: Option<DateTime<Utc>>,

    /// Creation time.
    #[serde(
        default,
        skip_serializing,
        deserialize_with = "crate::rest::datetime::deserialize_option"
    )]
    pub created: Option<DateTime<Utc>>,
}

impl Resource for IndirectParticipant {
    const NAME: &'static str = "IndirectParticipant";

    fn get_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl IndirectParticipant {
    /// Creates a participant pending creation.
    #[must_use]
    pub fn new(
        tax_id: impl Into<String>,
        workspace_id: impl Into<String>,
        request_url: impl Into<String>,
    ) -> Self {
        Self {
            tax_id: tax_id.into(),
            workspace_id: workspace_id.into(),
            request_url: request_url.into(),
            ..Self::default()
        }
    }

    /// Registers participants in a single batch.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidParameter`] for an empty batch, or the
    /// API error.
    pub async fn create(
        client: &StarkClient,
        participants: &[Self],
    ) -> Result<Vec<Self>, ResourceError> {
        operations::post_multi(client, participants, None).await
    }

    /// Fetches one participant.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the participant does not exist.
    pub async fn get(client: &StarkClient, id: &str) -> Result<Self, ResourceError> {
        operations::get_id(client, id, None).await
    }

    /// Removes a participant, returning its final state.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NotFound`] if the participant does not exist.
    pub async fn delete(client: &StarkClient, id: &str) -> Result<Self, ResourceError> {
        operations::delete_id(client, id).await
    }
}
