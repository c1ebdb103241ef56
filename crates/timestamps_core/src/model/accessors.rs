//! Accessor family shared by every `NullTime` field of a container.
//!
//! One invocation generates, per field `x`: raw get/set, `NullTime` get/set,
//! layout-generic get/set and one named pair per fixed layout plus a
//! custom-layout pair. Set-operations write the field only after a successful
//! parse.

macro_rules! null_time_accessors {
    ($owner:ident { $($field:ident),+ $(,)? }) => {
        paste::paste! {
            impl $owner {
                $(
                    #[doc = "Returns `" $field "`, or the Unix epoch when it is unset."]
                    pub fn $field(&self) -> $crate::time::ZonedTime {
                        self.$field.time()
                    }

                    #[doc = "Sets `" $field "` to `time`."]
                    pub fn [<set_ $field>]<Tz: chrono::TimeZone>(&mut self, time: chrono::DateTime<Tz>) {
                        self.$field = $crate::time::NullTime::at(time);
                    }

                    #[doc = "Returns `" $field "` as a nullable value."]
                    pub fn [<$field _sql_time>](&self) -> $crate::time::NullTime {
                        self.$field
                    }

                    #[doc = "Replaces `" $field "`, including clearing it."]
                    pub fn [<set_ $field _sql_time>](&mut self, value: $crate::time::NullTime) {
                        self.$field = value;
                    }

                    #[doc = "Formats `" $field "` with `layout`; empty when unset."]
                    pub fn [<format_ $field>](&self, layout: $crate::time::Layout<'_>) -> String {
                        self.$field.format(layout)
                    }

                    #[doc = "Parses `text` with `layout` into `" $field "`."]
                    ///
                    /// # Errors
                    /// - Returns `ParseError` on mismatch; the field keeps its previous value.
                    pub fn [<set_ $field _from>](
                        &mut self,
                        layout: $crate::time::Layout<'_>,
                        text: &str,
                    ) -> Result<(), $crate::time::ParseError> {
                        self.$field = $crate::time::NullTime::parse(layout, text)?;
                        Ok(())
                    }

                    #[doc = "Formats `" $field "` as `2006-01-02 15:04:05`."]
                    pub fn [<$field _date>](&self) -> String {
                        self.[<format_ $field>]($crate::time::Layout::Date)
                    }

                    #[doc = "Parses `2006-01-02 15:04:05` into `" $field "`."]
                    pub fn [<set_ $field _date>](&mut self, text: &str) -> Result<(), $crate::time::ParseError> {
                        self.[<set_ $field _from>]($crate::time::Layout::Date, text)
                    }

                    #[doc = "Formats `" $field "` as `2006-01-02 15:04:05 Z07:00`."]
                    pub fn [<$field _date_with_zone>](&self) -> String {
                        self.[<format_ $field>]($crate::time::Layout::DateWithZone)
                    }

                    #[doc = "Parses `2006-01-02 15:04:05 Z07:00` into `" $field "`."]
                    pub fn [<set_ $field _date_with_zone>](&mut self, text: &str) -> Result<(), $crate::time::ParseError> {
                        self.[<set_ $field _from>]($crate::time::Layout::DateWithZone, text)
                    }

                    #[doc = "Formats `" $field "` as `2006-01-02 15:04:05.999999999`."]
                    pub fn [<$field _fine_date>](&self) -> String {
                        self.[<format_ $field>]($crate::time::Layout::FineDate)
                    }

                    #[doc = "Parses `2006-01-02 15:04:05.999999999` into `" $field "`."]
                    pub fn [<set_ $field _fine_date>](&mut self, text: &str) -> Result<(), $crate::time::ParseError> {
                        self.[<set_ $field _from>]($crate::time::Layout::FineDate, text)
                    }

                    #[doc = "Formats `" $field "` as `2006-01-02 15:04:05.999999999 Z07:00`."]
                    pub fn [<$field _fine_date_with_zone>](&self) -> String {
                        self.[<format_ $field>]($crate::time::Layout::FineDateWithZone)
                    }

                    #[doc = "Parses `2006-01-02 15:04:05.999999999 Z07:00` into `" $field "`."]
                    pub fn [<set_ $field _fine_date_with_zone>](&mut self, text: &str) -> Result<(), $crate::time::ParseError> {
                        self.[<set_ $field _from>]($crate::time::Layout::FineDateWithZone, text)
                    }

                    #[doc = "Formats `" $field "` as RFC 3339."]
                    pub fn [<$field _rfc3339_date>](&self) -> String {
                        self.[<format_ $field>]($crate::time::Layout::Rfc3339)
                    }

                    #[doc = "Parses RFC 3339 into `" $field "`."]
                    pub fn [<set_ $field _rfc3339_date>](&mut self, text: &str) -> Result<(), $crate::time::ParseError> {
                        self.[<set_ $field _from>]($crate::time::Layout::Rfc3339, text)
                    }

                    #[doc = "Formats `" $field "` as RFC 3339 with nanoseconds."]
                    pub fn [<$field _rfc3339_nano_date>](&self) -> String {
                        self.[<format_ $field>]($crate::time::Layout::Rfc3339Nano)
                    }

                    #[doc = "Parses RFC 3339 with nanoseconds into `" $field "`."]
                    pub fn [<set_ $field _rfc3339_nano_date>](&mut self, text: &str) -> Result<(), $crate::time::ParseError> {
                        self.[<set_ $field _from>]($crate::time::Layout::Rfc3339Nano, text)
                    }

                    #[doc = "Formats `" $field "` with a chrono `strftime` layout."]
                    pub fn [<$field _with_layout>](&self, layout: &str) -> String {
                        self.[<format_ $field>]($crate::time::Layout::Custom(layout))
                    }

                    #[doc = "Parses `text` with a chrono `strftime` layout into `" $field "`."]
                    pub fn [<set_ $field _with_layout>](&mut self, layout: &str, text: &str) -> Result<(), $crate::time::ParseError> {
                        self.[<set_ $field _from>]($crate::time::Layout::Custom(layout), text)
                    }
                )+
            }
        }
    };
}

pub(crate) use null_time_accessors;
