use super::{ListType, MapType, SetType, Type, TypeReference};
use alloc::vec::Vec;

/// Trait for visiting type references.
///
/// Implement this trait to traverse a type tree without mutation. The
/// default implementation handles recursion: map key before value, then
/// container element. Primitives and references are leaves.
///
/// The `'ty` lifetime lets a visitor keep borrows into the tree it walks.
///
/// # Example
///
/// ```
/// use thrift_idl_types::{PrimitiveKind, Type, TypeVisitor};
///
/// struct DepthCalculator {
///     max_depth: usize,
///     current_depth: usize,
/// }
///
/// impl<'ty> TypeVisitor<'ty> for DepthCalculator {
///     fn visit_ty(&mut self, ty: &'ty Type) {
///         self.current_depth += 1;
///         self.max_depth = self.max_depth.max(self.current_depth);
///
///         self.super_visit_ty(ty);
///
///         self.current_depth -= 1;
///     }
/// }
///
/// let ty = Type::list(Type::list(PrimitiveKind::I32.into(), vec![]), vec![]);
///
/// let mut calc = DepthCalculator { max_depth: 0, current_depth: 0 };
/// calc.visit_ty(&ty);
/// assert_eq!(calc.max_depth, 3); // list -> list -> i32
/// ```
pub trait TypeVisitor<'ty> {
    /// Visit a type.
    ///
    /// Override this to customize behavior for all types.
    /// Call `super_visit_ty` to recurse into nested types.
    fn visit_ty(&mut self, ty: &'ty Type) {
        self.super_visit_ty(ty)
    }

    /// Default recursion into nested types.
    ///
    /// Override `visit_ty` instead of this method.
    fn super_visit_ty(&mut self, ty: &'ty Type) {
        match ty {
            // Base cases - no recursion
            Type::Primitive(_) | Type::Reference(_) => {}

            Type::Map(MapType { key, value, .. }) => {
                self.visit_ty(key);
                self.visit_ty(value);
            }

            Type::List(ListType { element, .. }) | Type::Set(SetType { element, .. }) => {
                self.visit_ty(element);
            }
        }
    }
}

/// Collects every user-defined type reference in a tree, in visit order.
///
/// This is what a resolver walks to find the declarations a type depends on.
///
/// # Example
///
/// ```
/// use thrift_idl_types::{ReferenceCollector, Type, TypeVisitor};
///
/// let ty = Type::map(Type::reference("Key", 3), Type::reference("Value", 3), vec![]);
///
/// let mut collector = ReferenceCollector::default();
/// collector.visit_ty(&ty);
/// let names: Vec<_> = collector.references.iter().map(|r| r.name.as_str()).collect();
/// assert_eq!(names, ["Key", "Value"]);
/// ```
#[derive(Debug, Default)]
pub struct ReferenceCollector<'ty> {
    pub references: Vec<&'ty TypeReference>,
}

impl<'ty> ReferenceCollector<'ty> {
    /// Collects the references of a single tree.
    pub fn collect(ty: &'ty Type) -> Vec<&'ty TypeReference> {
        let mut collector = Self::default();
        collector.visit_ty(ty);
        collector.references
    }
}

impl<'ty> TypeVisitor<'ty> for ReferenceCollector<'ty> {
    fn visit_ty(&mut self, ty: &'ty Type) {
        if let Type::Reference(r) = ty {
            self.references.push(r);
        }
        self.super_visit_ty(ty);
    }
}

struct DepthCounter {
    max_depth: usize,
    current_depth: usize,
}

impl<'ty> TypeVisitor<'ty> for DepthCounter {
    fn visit_ty(&mut self, ty: &'ty Type) {
        self.current_depth += 1;
        self.max_depth = self.max_depth.max(self.current_depth);
        self.super_visit_ty(ty);
        self.current_depth -= 1;
    }
}

impl Type {
    /// Nesting depth of this type. Primitives and references have depth 1.
    pub fn depth(&self) -> usize {
        let mut counter = DepthCounter {
            max_depth: 0,
            current_depth: 0,
        };
        counter.visit_ty(self);
        counter.max_depth
    }

    /// User-defined types referenced anywhere in this type, in visit order.
    pub fn references(&self) -> Vec<&TypeReference> {
        ReferenceCollector::collect(self)
    }
}
