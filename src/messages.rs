//! User-facing message catalog.
//!
//! Each [`Locale`] maps to a static [`Messages`] table. Messages that
//! embed a value are exposed as methods.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Supported display languages.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Locale {
    #[default]
    En,
    Th,
}

impl Locale {
    pub fn messages(self) -> &'static Messages {
        match self {
            Locale::En => &EN,
            Locale::Th => &TH,
        }
    }
}

/// Static strings shown by the console and its renderers.
#[derive(Debug)]
pub struct Messages {
    pub empty_list: &'static str,
    pub error_prefix: &'static str,
    pub load_failed: &'static str,
    pub id_required: &'static str,
    pub name_email_required: &'static str,
    pub update_field_required: &'static str,
    pub label_id: &'static str,
    pub label_email: &'static str,
    pub label_role: &'static str,
    pub edit_button: &'static str,
    pub delete_button: &'static str,
    delete_prompt: &'static str,
    user_singular: &'static str,
    user_plural: &'static str,
}

impl Messages {
    /// Confirmation question asked before deleting `id`.
    pub fn confirm_delete(&self, id: &str) -> String {
        format!("{}{id}?", self.delete_prompt)
    }

    /// Noun for a count of users.
    pub fn users_noun(&self, count: usize) -> &'static str {
        if count == 1 { self.user_singular } else { self.user_plural }
    }
}

static EN: Messages = Messages {
    empty_list: "No users found",
    error_prefix: "Error",
    load_failed: "Unable to load data",
    id_required: "Please enter a User ID",
    name_email_required: "Please enter Name and Email",
    update_field_required: "Please enter at least one field to update",
    label_id: "ID",
    label_email: "Email",
    label_role: "Role",
    edit_button: "Edit",
    delete_button: "Delete",
    delete_prompt: "Are you sure you want to delete User ID: ",
    user_singular: "user",
    user_plural: "users",
};

static TH: Messages = Messages {
    empty_list: "ไม่มีผู้ใช้ในระบบ",
    error_prefix: "เกิดข้อผิดพลาด",
    load_failed: "ไม่สามารถโหลดข้อมูลได้",
    id_required: "กรุณาใส่ User ID",
    name_email_required: "กรุณาใส่ Name และ Email",
    update_field_required: "กรุณาใส่ข้อมูลที่ต้องการอัปเดตอย่างน้อย 1 field",
    label_id: "ID",
    label_email: "Email",
    label_role: "Role",
    edit_button: "แก้ไข",
    delete_button: "ลบ",
    delete_prompt: "คุณแน่ใจหรือไม่ที่จะลบ User ID: ",
    user_singular: "ผู้ใช้",
    user_plural: "ผู้ใช้",
};
