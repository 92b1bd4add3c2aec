use search_tree::unbalanced::Tree;

use crate::Op;

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        crate::do_ops::<Tree<i8>, _>(&ops)
    }
}

quickcheck::quickcheck! {
    fn with_removals(xs: Vec<i8>, removes: Vec<i8>) -> bool {
        crate::with_removals::<Tree<i8>, _>(xs, removes)
    }
}

quickcheck::quickcheck! {
    fn iterates_sorted(xs: Vec<i16>) -> bool {
        crate::iterates_sorted::<Tree<i16>, _>(xs)
    }
}

quickcheck::quickcheck! {
    fn ascending_inserts_make_a_list(n: u8) -> bool {
        let tree: Tree<u8> = (0..n).collect();
        tree.height() == isize::from(n) - 1 && tree.len() == usize::from(n)
    }
}

quickcheck::quickcheck! {
    fn traversals_visit_every_value(xs: Vec<i8>) -> bool {
        crate::traversals_visit_every_value::<Tree<i8>, _>(xs)
    }
}
