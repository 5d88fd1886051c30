//! Built-in region names used when no name list is configured.

pub const DEFAULT_REGION_NAMES: &[&str] = &[
    "PUBLIC_MEMBERS",
    "PUBLIC_PROPERTIES",
    "PUBLIC_FIELDS",
    "INTERNAL_MEMBERS",
    "INTERNAL_PROPERTIES",
    "INTERNAL_FIELDS",
    "PRIVATE_MEMBERS",
    "PRIVATE_PROPERTIES",
    "PRIVATE_FIELDS",
    "PROTECTED_MEMBERS",
    "PROTECTED_PROPERTIES",
    "PROTECTED_FIELDS",
    "CONST_MEMBERS",
    "CONST_PROPERTIES",
    "CONST_FIELDS",
    "STATIC_MEMBERS",
    "STATIC_PROPERTIES",
    "STATIC_FIELDS",
    "CONSTRUCTOR",
    "DESTRUCTOR",
    "INITIALIZATION",
    "PUBLIC_METHODS",
    "INTERNAL_METHODS",
    "PRIVATE_METHODS",
    "PROTECTED_METHODS",
    "OVERRIDE_METHODS",
    "ABSTRACT_METHODS",
    "STATIC_METHODS",
    "EVENT_CALLBACKS",
    "MAIN",
    "HELPERS",
    "UTILITIES",
];
