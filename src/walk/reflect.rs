//! Mapping of concrete host types into [`Value`] before traversal.
//!
//! Owning and borrowing indirections (`&T`, `Box`, `Rc`, `Arc`, `Option`) all become
//! [`Value::Ref`], so the walker treats them transparently. Records opt in through
//! [`reflect_struct!`](crate::reflect_struct).

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::hash::BuildHasher;
use std::rc::Rc;
use std::sync::Arc;

use crate::walk::value::{MapKey, MapValue, Value};
use crate::walk::visit::Visitor;
use crate::walk::walker::walk;

/// Host type that can be presented to the walker.
pub trait Reflect {
	/// Build the runtime value tree for `self`.
	fn reflect(&self) -> Value;
}

/// Host type usable as an association key.
pub trait ReflectKey {
	/// Build the association key for `self`.
	fn reflect_key(&self) -> MapKey;
}

/// Reflect `host` once, then walk the result.
pub fn walk_reflect<T, V>(host: &T, visitor: &mut V)
where
	T: Reflect + ?Sized,
	V: Visitor + ?Sized,
{
	walk(&host.reflect(), visitor);
}

impl Reflect for Value {
	fn reflect(&self) -> Value {
		self.clone()
	}
}

impl Reflect for () {
	fn reflect(&self) -> Value {
		Value::Null
	}
}

impl Reflect for str {
	fn reflect(&self) -> Value {
		Value::string(self)
	}
}

impl Reflect for String {
	fn reflect(&self) -> Value {
		Value::string(self.as_str())
	}
}

impl Reflect for Cow<'_, str> {
	fn reflect(&self) -> Value {
		Value::string(&**self)
	}
}

impl Reflect for bool {
	fn reflect(&self) -> Value {
		Value::Bool(*self)
	}
}

impl Reflect for char {
	fn reflect(&self) -> Value {
		Value::Char(*self)
	}
}

macro_rules! reflect_scalar {
	($variant:ident as $repr:ty: $($ty:ty),+) => {
		$(
			impl Reflect for $ty {
				fn reflect(&self) -> Value {
					Value::$variant(<$repr>::from(*self))
				}
			}
		)+
	};
}

reflect_scalar!(I64 as i64: i8, i16, i32, i64);
reflect_scalar!(U64 as u64: u8, u16, u32, u64);
reflect_scalar!(F64 as f64: f32, f64);

impl Reflect for isize {
	fn reflect(&self) -> Value {
		Value::I64(*self as i64)
	}
}

impl Reflect for usize {
	fn reflect(&self) -> Value {
		Value::U64(*self as u64)
	}
}

impl<T: Reflect + ?Sized> Reflect for &T {
	fn reflect(&self) -> Value {
		Value::reference((**self).reflect())
	}
}

impl<T: Reflect + ?Sized> Reflect for Box<T> {
	fn reflect(&self) -> Value {
		Value::reference((**self).reflect())
	}
}

impl<T: Reflect + ?Sized> Reflect for Rc<T> {
	fn reflect(&self) -> Value {
		Value::reference((**self).reflect())
	}
}

impl<T: Reflect + ?Sized> Reflect for Arc<T> {
	fn reflect(&self) -> Value {
		Value::reference((**self).reflect())
	}
}

impl<T: Reflect> Reflect for Option<T> {
	fn reflect(&self) -> Value {
		match self {
			Some(inner) => Value::reference(inner.reflect()),
			None => Value::null_ref(),
		}
	}
}

impl<T: Reflect, const N: usize> Reflect for [T; N] {
	fn reflect(&self) -> Value {
		Value::Array(self.iter().map(Reflect::reflect).collect())
	}
}

impl<T: Reflect> Reflect for [T] {
	fn reflect(&self) -> Value {
		Value::List(self.iter().map(Reflect::reflect).collect())
	}
}

impl<T: Reflect> Reflect for Vec<T> {
	fn reflect(&self) -> Value {
		self.as_slice().reflect()
	}
}

impl<T: Reflect> Reflect for VecDeque<T> {
	fn reflect(&self) -> Value {
		Value::List(self.iter().map(Reflect::reflect).collect())
	}
}

impl<K: ReflectKey, V: Reflect, S: BuildHasher> Reflect for HashMap<K, V, S> {
	fn reflect(&self) -> Value {
		Value::Map(self.iter().map(|(key, value)| (key.reflect_key(), value.reflect())).collect::<MapValue>())
	}
}

impl<K: ReflectKey, V: Reflect> Reflect for BTreeMap<K, V> {
	fn reflect(&self) -> Value {
		Value::Map(self.iter().map(|(key, value)| (key.reflect_key(), value.reflect())).collect::<MapValue>())
	}
}

impl ReflectKey for str {
	fn reflect_key(&self) -> MapKey {
		MapKey::from(self)
	}
}

impl ReflectKey for String {
	fn reflect_key(&self) -> MapKey {
		MapKey::from(self.as_str())
	}
}

impl ReflectKey for bool {
	fn reflect_key(&self) -> MapKey {
		MapKey::Bool(*self)
	}
}

macro_rules! reflect_int_key {
	($($ty:ty),+) => {
		$(
			impl ReflectKey for $ty {
				fn reflect_key(&self) -> MapKey {
					MapKey::Int(i64::from(*self))
				}
			}
		)+
	};
}

reflect_int_key!(i8, i16, i32, i64, u8, u16, u32);

impl ReflectKey for isize {
	fn reflect_key(&self) -> MapKey {
		MapKey::Int(*self as i64)
	}
}

impl ReflectKey for u64 {
	fn reflect_key(&self) -> MapKey {
		match i64::try_from(*self) {
			Ok(value) => MapKey::Int(value),
			Err(_) => MapKey::UInt(*self),
		}
	}
}

impl ReflectKey for usize {
	fn reflect_key(&self) -> MapKey {
		(*self as u64).reflect_key()
	}
}

impl<K: ReflectKey + ?Sized> ReflectKey for &K {
	fn reflect_key(&self) -> MapKey {
		(**self).reflect_key()
	}
}

/// Implement [`Reflect`] for a record as a composite with the listed fields.
///
/// Fields are emitted in the listed order under their Rust names unless renamed with
/// `as "Name"`. Unlisted fields are invisible to the walker.
///
/// ```
/// use leafwalk::reflect_struct;
/// use leafwalk::walk::{Reflect, collect_leaves};
///
/// struct Profile {
/// 	age: u32,
/// 	city: String,
/// }
///
/// reflect_struct!(Profile { age as "Age", city as "City" });
///
/// let profile = Profile { age: 33, city: "Shanghai".to_owned() };
/// assert_eq!(collect_leaves(&profile.reflect()), ["Shanghai"]);
/// ```
#[macro_export]
macro_rules! reflect_struct {
	(@name $field:ident) => {
		stringify!($field)
	};
	(@name $field:ident as $name:literal) => {
		$name
	};
	($ty:ty { $($field:ident $(as $name:literal)?),* $(,)? }) => {
		impl $crate::walk::Reflect for $ty {
			fn reflect(&self) -> $crate::walk::Value {
				$crate::walk::Value::Struct(
					$crate::walk::StructValue::new(stringify!($ty))
						$(.field($crate::reflect_struct!(@name $field $(as $name)?), $crate::walk::Reflect::reflect(&self.$field)))*
				)
			}
		}
	};
}
