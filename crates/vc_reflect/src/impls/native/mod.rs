// bool, char, u8 - u128, i8 - i128, usize, isize, f32, f64, ()
mod native_basic;

// &'static str
mod native_str;

// [T; N]
mod native_array;
