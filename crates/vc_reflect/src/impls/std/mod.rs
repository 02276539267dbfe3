// HashMap, HashSet, RandomState
mod hash;
