// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    AppealField, DomainError, DraftAppeal, ValidationErrors, parse_ban_date, validate_draft,
};

fn create_valid_draft() -> DraftAppeal {
    DraftAppeal {
        player_name: String::from("John_Smith"),
        discord_tag: String::from("johnsmith#1234"),
        steam_id: String::from("76561198000000000"),
        ban_date: String::from("2026-03-14"),
        ban_reason: String::from("Random deathmatch at the bank"),
        appeal_reason: "a".repeat(50),
        additional_info: String::new(),
        acknowledgment: true,
    }
}

#[test]
fn test_validate_draft_accepts_valid_draft() {
    let errors: ValidationErrors = validate_draft(&create_valid_draft());
    assert!(errors.is_empty());
}

#[test]
fn test_validate_draft_reports_every_field_of_blank_draft() {
    let errors: ValidationErrors = validate_draft(&DraftAppeal::default());

    assert_eq!(
        errors.fields(),
        vec![
            AppealField::PlayerName,
            AppealField::DiscordTag,
            AppealField::SteamId,
            AppealField::BanDate,
            AppealField::BanReason,
            AppealField::AppealReason,
            AppealField::Acknowledgment,
        ]
    );
    assert_eq!(
        errors.get(AppealField::PlayerName),
        Some("Player name is required")
    );
    assert_eq!(
        errors.get(AppealField::DiscordTag),
        Some("Discord tag is required")
    );
    assert_eq!(errors.get(AppealField::SteamId), Some("Steam ID is required"));
    assert_eq!(errors.get(AppealField::BanDate), Some("Ban date is required"));
    assert_eq!(
        errors.get(AppealField::BanReason),
        Some("Ban reason is required")
    );
    assert_eq!(
        errors.get(AppealField::AppealReason),
        Some("Appeal reason is required")
    );
    assert_eq!(
        errors.get(AppealField::Acknowledgment),
        Some("You must acknowledge the terms")
    );
}

#[test]
fn test_validate_draft_keys_exactly_the_offending_fields() {
    let mut draft: DraftAppeal = create_valid_draft();
    draft.steam_id = String::from("   ");
    draft.acknowledgment = false;

    let errors: ValidationErrors = validate_draft(&draft);
    assert_eq!(
        errors.fields(),
        vec![AppealField::SteamId, AppealField::Acknowledgment]
    );
}

#[test]
fn test_validate_draft_rejects_whitespace_only_identity_fields() {
    let mut draft: DraftAppeal = create_valid_draft();
    draft.player_name = String::from(" \t ");
    draft.discord_tag = String::from("  ");

    let errors: ValidationErrors = validate_draft(&draft);
    assert_eq!(
        errors.get(AppealField::PlayerName),
        Some("Player name is required")
    );
    assert_eq!(
        errors.get(AppealField::DiscordTag),
        Some("Discord tag is required")
    );
}

#[test]
fn test_validate_draft_rejects_discord_tag_without_marker() {
    let mut draft: DraftAppeal = create_valid_draft();
    draft.discord_tag = String::from("foo");

    let errors: ValidationErrors = validate_draft(&draft);
    assert_eq!(errors.fields(), vec![AppealField::DiscordTag]);
    assert!(
        errors
            .get(AppealField::DiscordTag)
            .unwrap()
            .starts_with("Please provide a valid Discord tag")
    );
}

#[test]
fn test_validate_draft_accepts_both_discord_tag_forms() {
    for tag in ["foo#1234", "@foo"] {
        let mut draft: DraftAppeal = create_valid_draft();
        draft.discord_tag = String::from(tag);
        assert!(validate_draft(&draft).is_empty(), "tag {tag} should pass");
    }
}

#[test]
fn test_validate_draft_appeal_reason_boundary() {
    let mut draft: DraftAppeal = create_valid_draft();

    draft.appeal_reason = "a".repeat(49);
    let errors: ValidationErrors = validate_draft(&draft);
    assert_eq!(
        errors.get(AppealField::AppealReason),
        Some("Appeal reason must be at least 50 characters")
    );

    draft.appeal_reason = "a".repeat(50);
    assert!(validate_draft(&draft).is_empty());
}

#[test]
fn test_validate_draft_counts_characters_not_bytes() {
    let mut draft: DraftAppeal = create_valid_draft();
    // 49 multi-byte characters are well over 50 bytes.
    draft.appeal_reason = "é".repeat(49);
    assert_eq!(
        validate_draft(&draft).fields(),
        vec![AppealField::AppealReason]
    );
}

#[test]
fn test_validate_draft_counts_untrimmed_length() {
    let mut draft: DraftAppeal = create_valid_draft();
    draft.appeal_reason = format!("{}{}", "a".repeat(45), " ".repeat(5));
    assert!(validate_draft(&draft).is_empty());
}

#[test]
fn test_validate_draft_rejects_malformed_ban_date() {
    let mut draft: DraftAppeal = create_valid_draft();
    draft.ban_date = String::from("14/03/2026");

    let errors: ValidationErrors = validate_draft(&draft);
    assert_eq!(
        errors.get(AppealField::BanDate),
        Some("Ban date must be a valid date (YYYY-MM-DD)")
    );
}

#[test]
fn test_validate_draft_ignores_additional_info() {
    let mut draft: DraftAppeal = create_valid_draft();
    draft.additional_info = String::from("x");
    assert!(validate_draft(&draft).is_empty());
}

#[test]
fn test_to_wire_map_uses_camel_case_names() {
    let mut draft: DraftAppeal = create_valid_draft();
    draft.appeal_reason = String::from("too short");

    let map = validate_draft(&draft).to_wire_map();
    assert_eq!(map.len(), 1);
    assert!(map.contains_key("appealReason"));
}

#[test]
fn test_parse_ban_date() {
    let date = parse_ban_date("2026-02-28").unwrap();
    assert_eq!(date.year(), 2026);
    assert_eq!(date.day(), 28);

    assert!(matches!(
        parse_ban_date("2026-02-30"),
        Err(DomainError::DateParseError { .. })
    ));
}
