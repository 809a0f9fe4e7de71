//! Textual form of builder arguments.

/// Default textual representation of a builder argument, used to resolve
/// `{arg1}`, `{arg2}`, ... placeholders.
///
/// Absent values render as the empty string.
pub trait TemplateArg {
    fn to_arg(&self) -> String;
}

macro_rules! display_template_arg {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TemplateArg for $ty {
                fn to_arg(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

display_template_arg!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, String,
);

impl TemplateArg for &str {
    fn to_arg(&self) -> String {
        (*self).to_string()
    }
}

impl<T: TemplateArg> TemplateArg for Option<T> {
    fn to_arg(&self) -> String {
        self.as_ref().map(TemplateArg::to_arg).unwrap_or_default()
    }
}
