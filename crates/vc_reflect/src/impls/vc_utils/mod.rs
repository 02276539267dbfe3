// vc_utils::hash::{HashMap, HashSet}, hashbrown collections, hash states
mod hash;
