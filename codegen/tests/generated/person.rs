// @generated by xsd-valuespace-codegen. Do not edit by hand.

//! Typed property accessors for `Person`.

use super::value_space::ValueSpaceViolation;

/// A resource with 4 typed properties.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Person {
    age: Option<i16>,
    nick_name: Option<String>,
    lang: Option<String>,
    homepage: Option<String>,
}

impl Person {
    /// Returns `age`, if set.
    pub fn age(&self) -> Option<i16> {
        self.age
    }

    /// Sets `age` after checking the value space of `xsd:unsignedByte`.
    ///
    /// # Errors
    ///
    /// Returns the first failing check; the field is left unchanged.
    pub fn set_age(&mut self, value: i16) -> Result<(), ValueSpaceViolation> {
        if value < 0 {
            return Err(ValueSpaceViolation::new("Value must be non-negative"));
        }
        if value > 255 {
            return Err(ValueSpaceViolation::new("Value must be less than 255"));
        }
        self.age = Some(value);
        Ok(())
    }

    /// Returns `nick_name`, if set.
    pub fn nick_name(&self) -> Option<&str> {
        self.nick_name.as_deref()
    }

    /// Sets `nick_name` after checking the value space of `xsd:token`.
    ///
    /// # Errors
    ///
    /// Returns the first failing check; the field is left unchanged.
    pub fn set_nick_name(&mut self, value: impl Into<String>) -> Result<(), ValueSpaceViolation> {
        let value = value.into();
        if value.as_str().contains(['\r', '\n', '\t']) {
            return Err(ValueSpaceViolation::new("Value must be a normalized string. Must not contain carriage return, line feed or tab."));
        }
        if value.as_str().starts_with(' ') || value.as_str().ends_with(' ') {
            return Err(ValueSpaceViolation::new("Value must be a XSD token. Must not start or end with whitespace."));
        }
        if value.as_str().contains("  ") {
            return Err(ValueSpaceViolation::new("Value must be a XSD token. Must not contain subsequences of two or more whitespaces."));
        }
        self.nick_name = Some(value);
        Ok(())
    }

    /// Returns `lang`, if set.
    pub fn lang(&self) -> Option<&str> {
        self.lang.as_deref()
    }

    /// Sets `lang` after checking the value space of `xsd:language`.
    ///
    /// # Errors
    ///
    /// Returns the first failing check; the field is left unchanged.
    pub fn set_lang(&mut self, value: impl Into<String>) -> Result<(), ValueSpaceViolation> {
        let value = value.into();
        if !super::value_space::pattern_0().is_some_and(|re| re.is_match(value.as_str())) {
            return Err(ValueSpaceViolation::new("Value must be a language identifier, as defined by BCP 47."));
        }
        self.lang = Some(value);
        Ok(())
    }

    /// Returns `homepage`, if set.
    pub fn homepage(&self) -> Option<&str> {
        self.homepage.as_deref()
    }

    /// Sets `homepage` (range `xsd:string`).
    pub fn set_homepage(&mut self, value: impl Into<String>) {
        self.homepage = Some(value.into());
    }
}
