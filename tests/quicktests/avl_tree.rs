use search_tree::avl::Tree;

use crate::Op;

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        crate::do_ops::<Tree<i8>, _>(&ops)
    }
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_string(ops: Vec<Op<String>>) -> bool {
        crate::do_ops::<Tree<String>, _>(&ops)
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
    fn stays_shallow(xs: Vec<u16>) -> bool {
        let tree: Tree<u16> = xs.into_iter().collect();
        let bound = (1.45 * ((tree.len() + 2) as f64).log2()).ceil() as isize - 1;
        tree.height() <= bound
    }
}

quickcheck::quickcheck! {
    fn traversals_visit_every_value(xs: Vec<i8>) -> bool {
        crate::traversals_visit_every_value::<Tree<i8>, _>(xs)
    }
}
