use mediatrack_model::{build_from_form, ItemForm, MissingTotal};
use mediatrack_types::{ItemId, MediaItem, MediaType, Status, Total, ValidationError};
use pretty_assertions::assert_eq;

fn form(title: &str, media_type: &str, current: &str, total: &str) -> ItemForm {
    ItemForm {
        title: title.into(),
        media_type: media_type.into(),
        status: "reading".into(),
        current: current.into(),
        total: total.into(),
    }
}

// ── Validation ───────────────────────────────────────────────────

#[test]
fn blank_title_is_rejected() {
    let err = build_from_form(&form("  ", "anime", "0", "12"), MissingTotal::default()).unwrap_err();
    assert_eq!(err, ValidationError::EmptyTitle);
}

#[test]
fn blank_media_type_is_rejected() {
    let err = build_from_form(&form("Berserk", " ", "0", "12"), MissingTotal::default()).unwrap_err();
    assert_eq!(err, ValidationError::EmptyMediaType);
}

#[test]
fn unknown_status_is_rejected() {
    let mut f = form("Berserk", "manga", "0", "12");
    f.status = "binging".into();
    let err = build_from_form(&f, MissingTotal::default()).unwrap_err();
    assert_eq!(err, ValidationError::UnknownStatus("binging".into()));
}

#[test]
fn blank_status_defaults_to_plan() {
    let mut f = form("Berserk", "manga", "", "");
    f.status = String::new();
    let draft = build_from_form(&f, MissingTotal::default()).unwrap();
    assert_eq!(draft.status, Status::Plan);
}

// ── Defaults ─────────────────────────────────────────────────────

#[test]
fn title_is_trimmed() {
    let draft = build_from_form(&form("  Vagabond  ", "manga", "3", "37"), MissingTotal::default()).unwrap();
    assert_eq!(draft.title, "Vagabond");
    assert_eq!(draft.current, 3);
    assert_eq!(draft.total, Total::from_count(37));
}

#[test]
fn unparseable_current_defaults_to_zero() {
    let draft = build_from_form(&form("Vagabond", "manga", "abc", "37"), MissingTotal::default()).unwrap();
    assert_eq!(draft.current, 0);
}

#[test]
fn missing_total_is_unbounded_by_default() {
    let draft = build_from_form(&form("One Piece", "manga", "1100", ""), MissingTotal::Unbounded).unwrap();
    assert_eq!(draft.total, Total::Unbounded);
    assert_eq!(draft.current, 1100);
}

#[test]
fn legacy_policy_defaults_total_to_one() {
    let draft = build_from_form(&form("One Piece", "manga", "0", "n/a"), MissingTotal::One).unwrap();
    assert_eq!(draft.total, Total::from_count(1));
}

#[test]
fn zero_total_follows_missing_policy() {
    let draft = build_from_form(&form("One Piece", "manga", "0", "0"), MissingTotal::Unbounded).unwrap();
    assert_eq!(draft.total, Total::Unbounded);
}

#[test]
fn current_is_clamped_to_total() {
    let draft = build_from_form(&form("Monster", "manga", "200", "162"), MissingTotal::default()).unwrap();
    assert_eq!(draft.current, 162);
}

// ── Edit round trip ──────────────────────────────────────────────

#[test]
fn prefilled_form_rebuilds_same_item() {
    let item = MediaItem {
        id: ItemId::from("m-7"),
        title: "Frieren".into(),
        media_type: MediaType::anime(),
        status: Status::OnHold,
        current: 10,
        total: Total::from_count(28),
    };
    let rebuilt = build_from_form(&ItemForm::from_item(&item), MissingTotal::default())
        .unwrap()
        .into_item(item.id.clone());
    assert_eq!(rebuilt, item);
}

#[test]
fn prefilled_form_leaves_unbounded_total_blank() {
    let item = MediaItem::new("Detective Conan", MediaType::manga(), Total::Unbounded);
    assert_eq!(ItemForm::from_item(&item).total, "");
}
