//! UI Components
//!
//! Leptos components for the organization profile and members pages.

mod add_member_form;
mod field_error;
mod member_table;
mod members_panel;
mod modal_dialog;
mod org_form;
mod org_profile;
mod program_chips;
mod program_picker;
mod remove_member_dialog;
mod success_banner;
mod tab_bar;

pub use add_member_form::AddMemberModal;
pub use field_error::FieldErrorText;
pub use member_table::MemberTable;
pub use members_panel::MembersPanel;
pub use modal_dialog::ModalDialog;
pub use org_form::EditOrgModal;
pub use org_profile::OrgProfileCard;
pub use program_chips::ProgramChips;
pub use program_picker::ProgramPicker;
pub use remove_member_dialog::RemoveMemberDialog;
pub use success_banner::SuccessBanner;
pub use tab_bar::{Tab, TabBar};
