//! Webex resource implementations.
//!
//! Each module declares one endpoint as a [`WebexResource`] together with
//! its parameter structs; the operations come from [`ResourceApi`].
//! Endpoint-specific operations, such as [`ResourceApi::me`] for people,
//! are inherent methods on the matching `ResourceApi` type.
//!
//! | Resource | Path | Extra operations |
//! |----------|------|------------------|
//! | [`Rooms`] | `rooms` | `get_meeting_info` |
//! | [`Messages`] | `messages` | `list_direct`, file uploads |
//! | [`Memberships`] | `memberships` | |
//! | [`Teams`] | `teams` | |
//! | [`TeamMemberships`] | `team/memberships` | |
//! | [`People`] | `people` | `me` |
//! | [`Webhooks`] | `webhooks` | |
//! | [`MeetingInvitees`] | `meetingInvitees` | `bulk` |
//! | [`Meetings`] | `meetings` | |
//! | [`Recordings`] | `recordings` | `get_scoped`, `delete_scoped` |
//! | [`Events`] | `events` | list and get only |
//! | [`AttachmentActions`] | `attachment/actions` | create and get only |
//!
//! Guest tokens are minted by [`GuestIssuerApi`], which has no CRUD shape.
//!
//! [`WebexResource`]: crate::rest::WebexResource
//! [`ResourceApi`]: crate::rest::ResourceApi
//! [`ResourceApi::me`]: crate::rest::ResourceApi

mod attachment_actions;
mod events;
mod guest_issuer;
mod meeting_invitees;
mod meetings;
mod memberships;
mod messages;
mod people;
mod recordings;
mod rooms;
mod team_memberships;
mod teams;
mod webhooks;

pub use attachment_actions::{AttachmentActionCreateParams, AttachmentActions};
pub use events::{EventListParams, Events};
pub use guest_issuer::{GuestIssuerApi, GuestTokenRequest, GUEST_LOGIN_PATH};
pub use meeting_invitees::{
    BulkInviteeParams, MeetingInviteeListParams, MeetingInviteeParams, MeetingInvitees,
};
pub use meetings::{MeetingCreateParams, MeetingListParams, MeetingUpdateParams, Meetings};
pub use memberships::{
    MembershipCreateParams, MembershipListParams, MembershipUpdateParams, Memberships,
};
pub use messages::{
    guess_content_type, DirectMessageListParams, MessageCreateParams, MessageListParams,
    MessageUpdateParams, Messages, DEFAULT_UPLOAD_CONTENT_TYPE,
};
pub use people::{People, PersonListParams, PersonParams};
pub use recordings::{RecordingListParams, RecordingScopeParams, Recordings};
pub use rooms::{RoomCreateParams, RoomListParams, RoomUpdateParams, Rooms};
pub use team_memberships::{
    TeamMembershipCreateParams, TeamMembershipListParams, TeamMembershipUpdateParams,
    TeamMemberships,
};
pub use teams::{TeamCreateParams, TeamListParams, TeamUpdateParams, Teams};
pub use webhooks::{WebhookCreateParams, WebhookListParams, WebhookUpdateParams, Webhooks};
