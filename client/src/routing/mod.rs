//! Access control and navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! `route` names every page, `policy` decides render-or-redirect for a
//! session and path, and `nav` lists the menu entries each role sees.

pub mod nav;
pub mod policy;
pub mod route;
