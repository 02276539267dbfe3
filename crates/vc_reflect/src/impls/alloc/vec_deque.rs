use alloc::collections::VecDeque;

crate::derive::impl_type_path!(::alloc::collections::VecDeque<T>);

impl_reflect_for_list!(VecDeque, push_back);

#[cfg(test)]
mod tests {
    use alloc::collections::VecDeque;

    use crate::ops::List;

    #[test]
    fn deque_items_by_index() {
        let mut value: VecDeque<u8> = VecDeque::with_capacity(4);
        value.push_back(2);
        value.push_back(3);
        value.push_front(1);

        let list: &dyn List = &value;
        assert_eq!(list.len(), 3);
        assert_eq!(list.get_as::<u8>(0), Some(&1));
        assert_eq!(list.get_as::<u8>(2), Some(&3));
        assert!(list.get(3).is_none());
    }
}
