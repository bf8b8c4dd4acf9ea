pub mod icons;
pub mod sidebar;
