// Option<T>
mod option;
