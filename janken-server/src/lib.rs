// 2022-2025 (c) Copyright Contributors to the GOSH DAO. All rights reserved.
//

pub mod cli;
pub mod executor;
pub mod signals;
