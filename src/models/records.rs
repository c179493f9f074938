//! Typed records for each Webex resource.

record! {
    /// A Webex room (space).
    Room => "room" {
        /// The unique identifier for the room.
        id: string("id"),
        /// A user-friendly name for the room.
        title: string("title"),
        /// The room type, `direct` or `group`.
        room_type: string("type"),
        /// Whether the room is moderated.
        is_locked: boolean("isLocked"),
        /// The ID of the team the room is associated with.
        team_id: string("teamId"),
        /// The date and time of the room's last activity.
        last_activity: datetime("lastActivity"),
        /// The ID of the person who created the room.
        creator_id: string("creatorId"),
        /// The date and time the room was created.
        created: datetime("created"),
        /// The ID of the organization which owns the room.
        owner_id: string("ownerId"),
        /// The space classification ID.
        classification_id: string("classificationId"),
        /// Whether only moderators may post.
        is_announcement_only: boolean("isAnnouncementOnly"),
        /// Whether the room is read-only.
        is_read_only: boolean("isReadOnly"),
        /// Whether the room is public, and therefore discoverable.
        is_public: boolean("isPublic"),
        /// The date and time the room was made public.
        made_public: datetime("madePublic"),
        /// The description of the room.
        description: string("description"),
    }
}

record! {
    /// Meeting details for a room.
    RoomMeetingInfo => "room_meeting_info" {
        room_id: string("roomId"),
        meeting_link: string("meetingLink"),
        sip_address: string("sipAddress"),
        meeting_number: string("meetingNumber"),
        call_in_toll_free_number: string("callInTollFreeNumber"),
        call_in_toll_number: string("callInTollNumber"),
    }
}

record! {
    /// A message posted to a room.
    Message => "message" {
        /// The unique identifier for the message.
        id: string("id"),
        /// The ID of the parent message when replying in a thread.
        parent_id: string("parentId"),
        /// The room ID of the message.
        room_id: string("roomId"),
        /// The type of room, `direct` or `group`.
        room_type: string("roomType"),
        /// The recipient's person ID for direct messages.
        to_person_id: string("toPersonId"),
        /// The recipient's email address for direct messages.
        to_person_email: string("toPersonEmail"),
        /// The message, in plain text.
        text: string("text"),
        /// The message, in Markdown format.
        markdown: string("markdown"),
        /// The text content of the message, in HTML format.
        html: string("html"),
        /// Public URLs for files attached to the message.
        files: strings("files"),
        /// The person ID of the message author.
        person_id: string("personId"),
        /// The email address of the message author.
        person_email: string("personEmail"),
        /// People IDs for anyone mentioned in the message.
        mentioned_people: strings("mentionedPeople"),
        /// Group names for groups mentioned in the message.
        mentioned_groups: strings("mentionedGroups"),
        /// Message content attachments, such as cards.
        attachments: value("attachments"),
        /// The date and time the message was created.
        created: datetime("created"),
        /// The date and time the message was last edited.
        updated: datetime("updated"),
    }
}

record! {
    /// A person's membership in a room.
    Membership => "membership" {
        id: string("id"),
        room_id: string("roomId"),
        person_id: string("personId"),
        person_email: string("personEmail"),
        person_display_name: string("personDisplayName"),
        person_org_id: string("personOrgId"),
        is_moderator: boolean("isModerator"),
        is_monitor: boolean("isMonitor"),
        created: datetime("created"),
    }
}

record! {
    /// A team: a group of people with a set of shared rooms.
    Team => "team" {
        id: string("id"),
        name: string("name"),
        creator_id: string("creatorId"),
        created: datetime("created"),
    }
}

record! {
    /// A person's membership in a team.
    TeamMembership => "team_membership" {
        id: string("id"),
        team_id: string("teamId"),
        person_id: string("personId"),
        person_email: string("personEmail"),
        person_display_name: string("personDisplayName"),
        person_org_id: string("personOrgId"),
        is_moderator: boolean("isModerator"),
        created: datetime("created"),
    }
}

record! {
    /// A Webex user.
    Person => "person" {
        /// A unique identifier for the person.
        id: string("id"),
        /// The email addresses of the person.
        emails: strings("emails"),
        /// Phone numbers for the person.
        phone_numbers: value("phoneNumbers"),
        /// The Webex Calling extension for the person.
        extension: string("extension"),
        /// The ID of the location for this person.
        location_id: string("locationId"),
        /// The full name of the person.
        display_name: string("displayName"),
        /// The nickname of the person.
        nick_name: string("nickName"),
        /// The first name of the person.
        first_name: string("firstName"),
        /// The last name of the person.
        last_name: string("lastName"),
        /// The URL to the person's avatar in PNG format.
        avatar: string("avatar"),
        /// The ID of the organization to which this person belongs.
        org_id: string("orgId"),
        /// Role IDs assigned to the person.
        roles: strings("roles"),
        /// License IDs allocated to the person.
        licenses: strings("licenses"),
        /// The business department the person belongs to.
        department: string("department"),
        /// A manager identifier.
        manager: string("manager"),
        /// Person ID of the manager.
        manager_id: string("managerId"),
        /// The person's title.
        title: string("title"),
        /// The person's addresses.
        addresses: value("addresses"),
        /// The date and time the person was created.
        created: datetime("created"),
        /// The date and time the person was last changed.
        last_modified: datetime("lastModified"),
        /// The time zone of the person.
        timezone: string("timezone"),
        /// The date and time of the person's last activity.
        last_activity: datetime("lastActivity"),
        /// Webex site URLs for the person.
        site_urls: strings("siteUrls"),
        /// SIP addresses of the person.
        sip_addresses: value("sipAddresses"),
        /// XMPP federation address.
        xmpp_federation_jid: string("xmppFederationJid"),
        /// The current presence status of the person.
        status: string("status"),
        /// Whether the invite is pending.
        invite_pending: boolean("invitePending"),
        /// Whether the person is allowed to use Webex.
        login_enabled: boolean("loginEnabled"),
        /// The type of person account, such as `person` or `bot`.
        person_type: string("type"),
    }
}

record! {
    /// A webhook subscription.
    Webhook => "webhook" {
        id: string("id"),
        name: string("name"),
        target_url: string("targetUrl"),
        resource: string("resource"),
        event: string("event"),
        filter: string("filter"),
        secret: string("secret"),
        org_id: string("orgId"),
        created_by: string("createdBy"),
        app_id: string("appId"),
        owned_by: string("ownedBy"),
        /// `active` or `inactive`.
        status: string("status"),
        created: datetime("created"),
    }
}

record! {
    /// An invitee of a meeting.
    MeetingInvitee => "meeting_invitee" {
        id: string("id"),
        email: string("email"),
        display_name: string("displayName"),
        co_host: boolean("coHost"),
        meeting_id: string("meetingId"),
        panelist: boolean("panelist"),
    }
}

record! {
    /// A scheduled meeting, meeting series or meeting instance.
    Meeting => "meeting" {
        id: string("id"),
        meeting_number: string("meetingNumber"),
        title: string("title"),
        agenda: string("agenda"),
        password: string("password"),
        /// `meetingSeries`, `scheduledMeeting` or `meeting`.
        meeting_type: string("meetingType"),
        state: string("state"),
        timezone: string("timezone"),
        start: datetime("start"),
        end: datetime("end"),
        host_user_id: string("hostUserId"),
        host_display_name: string("hostDisplayName"),
        host_email: string("hostEmail"),
        site_url: string("siteUrl"),
        /// Link to the meeting information page.
        web_link: string("webLink"),
        sip_address: string("sipAddress"),
        /// `meeting`, `webinar` or `personalRoomMeeting`.
        scheduled_type: string("scheduledType"),
        meeting_series_id: string("meetingSeriesId"),
        /// The room associated with the meeting, if any.
        room_id: string("roomId"),
        integration_tags: strings("integrationTags"),
    }
}

record! {
    /// A meeting recording.
    Recording => "recording" {
        id: string("id"),
        meeting_id: string("meetingId"),
        scheduled_meeting_id: string("scheduledMeetingId"),
        meeting_series_id: string("meetingSeriesId"),
        topic: string("topic"),
        create_time: datetime("createTime"),
        time_recorded: datetime("timeRecorded"),
        site_url: string("siteUrl"),
        download_url: string("downloadUrl"),
        playback_url: string("playbackUrl"),
        password: string("password"),
        /// `MP4`, `ARF` or `UPLOADED`.
        format: string("format"),
        service_type: string("serviceType"),
        duration_seconds: integer("durationSeconds"),
        size_bytes: integer("sizeBytes"),
        share_to_me: boolean("shareToMe"),
        integration_tags: strings("integrationTags"),
    }
}

record! {
    /// A compliance event, such as a message being created.
    Event => "event" {
        id: string("id"),
        /// The resource type, e.g. `messages` or `memberships`.
        resource: string("resource"),
        /// The action taken, e.g. `created` or `deleted`.
        event_type: string("type"),
        app_id: string("appId"),
        actor_id: string("actorId"),
        org_id: string("orgId"),
        created: datetime("created"),
        /// The resource as it was when the event happened.
        data: value("data"),
    }
}

record! {
    /// A user's submission of a card attached to a message.
    AttachmentAction => "attachment_action" {
        id: string("id"),
        person_id: string("personId"),
        room_id: string("roomId"),
        /// Always `submit` for card submissions.
        action_type: string("type"),
        message_id: string("messageId"),
        /// The card inputs, keyed by input ID.
        inputs: value("inputs"),
        created: datetime("created"),
    }
}

record! {
    /// An access token issued to a guest user.
    GuestIssuerToken => "guest_issuer_token" {
        token: string("token"),
        /// Seconds until the token expires.
        expires_in: integer("expiresIn"),
    }
}
