// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Command descriptors
//!
//! Every API command is a struct implementing [`Command`]. The struct holds
//! the command's typed parameters: required ones are plain fields set by
//! `new`, optional ones are `Option`s set through builder methods named
//! after the field.
//!
//! The structs are declared with the crate-private `command!` macro:
//!
//! ```text
//! command! {
//!     /// Creates a VPC
//!     CreateVpc("createVPC", Async, Entity) -> Vpc {
//!         required { cidr: String, displaytext: String, name: String, ... }
//!         optional { networkdomain: String, start: bool, ... }
//!     }
//! }
//! ```
//!
//! A field whose wire name is not a valid Rust identifier is renamed with
//! `field = "wire": Type`.

use serde::de::DeserializeOwned;

use crate::params::Params;

/// Whether a command completes in the request or through an async job
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Sync,
    Async,
}

/// Shape of a command's final payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// The record sits under a single entity key, `{"vpc": {...}}`
    Entity,
    /// The payload is the response type itself
    Flat,
}

/// A CloudStack API command
pub trait Command {
    /// Command name on the wire
    const NAME: &'static str;
    const MODE: Mode;
    const SHAPE: Shape;
    /// Wire names of every parameter the command accepts
    const FIELDS: &'static [&'static str];

    type Response: DeserializeOwned;

    /// Serialize the set fields; unset optional fields are omitted
    fn to_params(&self) -> Params;

    /// Raw parameters added through [`Command::set_param`]
    fn extra_params_mut(&mut self) -> &mut Params;

    /// Whether the command declares the parameter `key`
    fn accepts(key: &str) -> bool {
        Self::FIELDS.contains(&key)
    }

    /// Set a declared parameter from its string form
    ///
    /// Returns `false`, leaving the command untouched, when the command
    /// does not declare `key`. Typed fields win over raw parameters of the
    /// same name.
    fn set_param(&mut self, key: &str, value: impl Into<String>) -> bool
    where
        Self: Sized,
    {
        if !Self::accepts(key) {
            return false;
        }
        self.extra_params_mut().set(key, value);
        true
    }
}

macro_rules! wire_name {
    ($field:ident) => {
        stringify!($field)
    };
    ($field:ident $wire:literal) => {
        $wire
    };
}

macro_rules! command {
    ($(
        $(#[$meta:meta])*
        $name:ident($api:literal, $mode:ident, $shape:ident) -> $resp:ty {
            required {
                $( $(#[$rmeta:meta])* $rfield:ident $(= $rwire:literal)?: $rty:ty ),* $(,)?
            }
            optional {
                $( $(#[$ometa:meta])* $ofield:ident $(= $owire:literal)?: $oty:ty ),* $(,)?
            }
        }
    )+) => {$(
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            $( $(#[$rmeta])* pub $rfield: $rty, )*
            $( $(#[$ometa])* pub $ofield: Option<$oty>, )*
            extra: $crate::params::Params,
        }

        #[allow(clippy::new_without_default)]
        impl $name {
            #[allow(clippy::too_many_arguments)]
            pub fn new($( $rfield: impl Into<$rty> ),*) -> Self {
                Self {
                    $( $rfield: $rfield.into(), )*
                    $( $ofield: None, )*
                    extra: $crate::params::Params::new(),
                }
            }

            $(
                pub fn $ofield(mut self, value: impl Into<$oty>) -> Self {
                    self.$ofield = Some(value.into());
                    self
                }
            )*
        }

        impl $crate::command::Command for $name {
            const NAME: &'static str = $api;
            const MODE: $crate::command::Mode = $crate::command::Mode::$mode;
            const SHAPE: $crate::command::Shape = $crate::command::Shape::$shape;
            const FIELDS: &'static [&'static str] = &[
                $( $crate::command::wire_name!($rfield $($rwire)?), )*
                $( $crate::command::wire_name!($ofield $($owire)?), )*
            ];

            type Response = $resp;

            #[allow(unused_mut, unused_imports)]
            fn to_params(&self) -> $crate::params::Params {
                use $crate::params::ParamValue;

                let mut params = self.extra.clone();
                $( self.$rfield.write($crate::command::wire_name!($rfield $($rwire)?), &mut params); )*
                $(
                    if let Some(value) = &self.$ofield {
                        value.write($crate::command::wire_name!($ofield $($owire)?), &mut params);
                    }
                )*
                params
            }

            fn extra_params_mut(&mut self) -> &mut $crate::params::Params {
                &mut self.extra
            }
        }
    )+};
}

pub(crate) use command;
pub(crate) use wire_name;
