// mallow-core - Hash map built-in functions
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Hash map operations: hash-map, get, assoc, contains?, keys, vals

use mallow_parser::{KeyedMap, MallowVal};

use crate::error::{Error, Result};

use super::check_arity;

fn expect_map<'a>(name: &'static str, val: &'a MallowVal) -> Result<Option<&'a KeyedMap>> {
    match val {
        MallowVal::Nil => Ok(None),
        MallowVal::HashMap(map) => Ok(Some(map)),
        other => Err(Error::type_error_in(name, "hash-map", other.type_name())),
    }
}

fn insert_pairs(name: &'static str, mut map: KeyedMap, kvs: &[MallowVal]) -> Result<KeyedMap> {
    if kvs.len() % 2 != 0 {
        return Err(Error::runtime(format!(
            "{}: expected an even number of key/value arguments, got {}",
            name,
            kvs.len()
        )));
    }
    for kv in kvs.chunks(2) {
        map.insert(kv[0].hash_key(), (kv[0].clone(), kv[1].clone()));
    }
    Ok(map)
}

/// (hash-map & kvs)
pub(crate) fn builtin_hash_map(args: &[MallowVal]) -> Result<MallowVal> {
    Ok(MallowVal::HashMap(insert_pairs("hash-map", KeyedMap::new(), args)?))
}

/// (get m k) - nil when the key is absent or the map is nil
pub(crate) fn builtin_get(args: &[MallowVal]) -> Result<MallowVal> {
    check_arity("get", args, 2)?;
    let found = expect_map("get", &args[0])?
        .and_then(|map| map.get(&args[1].hash_key()))
        .map(|(_, v)| v.clone());
    Ok(found.unwrap_or(MallowVal::Nil))
}

/// (assoc m & kvs) - a new map with the given entries added or replaced
pub(crate) fn builtin_assoc(args: &[MallowVal]) -> Result<MallowVal> {
    let Some((map, kvs)) = args.split_first() else {
        return Err(Error::arity_at_least("assoc", 1, 0));
    };
    let base = expect_map("assoc", map)?.cloned().unwrap_or_default();
    Ok(MallowVal::HashMap(insert_pairs("assoc", base, kvs)?))
}

/// (contains? m k)
pub(crate) fn builtin_contains_p(args: &[MallowVal]) -> Result<MallowVal> {
    check_arity("contains?", args, 2)?;
    let present = expect_map("contains?", &args[0])?
        .is_some_and(|map| map.contains_key(&args[1].hash_key()));
    Ok(MallowVal::bool(present))
}

/// (keys m)
pub(crate) fn builtin_keys(args: &[MallowVal]) -> Result<MallowVal> {
    check_arity("keys", args, 1)?;
    let keys = expect_map("keys", &args[0])?
        .map(|map| map.values().map(|(k, _)| k.clone()).collect())
        .unwrap_or_default();
    Ok(MallowVal::List(keys))
}

/// (vals m)
pub(crate) fn builtin_vals(args: &[MallowVal]) -> Result<MallowVal> {
    check_arity("vals", args, 1)?;
    let vals = expect_map("vals", &args[0])?
        .map(|map| map.values().map(|(_, v)| v.clone()).collect())
        .unwrap_or_default();
    Ok(MallowVal::List(vals))
}
