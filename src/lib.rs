//! # fundamm
//!
//! Funding-pool engine with an embedded constant-product market: raise a
//! settlement asset against a claim on a real-world asset's proceeds,
//! with continuous price discovery from the first contribution.
//!
//! A pool is configured with a funding target, a claim supply, and a
//! reward rate. A built-in AMM quotes the claim asset against the
//! settlement asset over virtual reserves seeded from those targets, so
//! contributors can buy in (and sell back out) at a market price at any
//! point of the raise:
//!
//! - **Open phase**: buys accumulate toward the funding target; sells
//!   retract from it. When the accumulated settlement hits the target,
//!   the raise is complete and the target amount is allocated to the
//!   pool owner.
//! - **Funded phase**: the owner withdraws the allocation and puts it to
//!   work; trading continues against the remaining liquidity.
//! - **Completion**: the owner returns principal plus a reward. Sellers
//!   who exit after the completion deadline share the reward pro rata as
//!   a bonus on top of the AMM payout.
//!
//! Asset custody stays outside the crate: the engine drives pluggable
//! [`traits`] for the settlement ledger, the claim ledger, role
//! resolution, and audit logging, and commits its own state only after
//! every external call succeeded.
//!
//! # Quick Start
//!
//! ```rust
//! use fundamm::config::{PoolConfig, ProtocolParams};
//! use fundamm::domain::{
//!     AccountId, Amount, AssetId, BasisPoints, CallContext, ClaimId, SwapDirection, Timestamp,
//! };
//! use fundamm::env::InMemoryExternals;
//! use fundamm::factory::PoolFactory;
//! use fundamm::pools::PoolVariant;
//! use fundamm::traits::Role;
//!
//! // Protocol-level knobs: 10% fee ceiling, 2x virtual-reserve multipliers.
//! let params = ProtocolParams::new(
//!     BasisPoints::new(1_000),
//!     BasisPoints::new(20_000),
//!     BasisPoints::new(20_000),
//! )
//! .expect("valid params");
//!
//! // Raise 10_000 settlement against 1_000_000 claims at a 5% reward.
//! let pool_account = AccountId::from_bytes([3u8; 32]);
//! let config = PoolConfig::new(
//!     AssetId::from_bytes([1u8; 32]),
//!     AssetId::from_bytes([2u8; 32]),
//!     ClaimId::new(1),
//!     pool_account,
//!     AccountId::from_bytes([4u8; 32]),
//!     BasisPoints::new(300),
//!     BasisPoints::new(300),
//!     Amount::new(10_000),
//!     Amount::new(1_000_000),
//!     BasisPoints::new(500),
//!     Timestamp::new(1_000),
//!     Timestamp::new(2_000),
//!     Timestamp::new(0),
//!     &params,
//! )
//! .expect("valid config");
//!
//! // Wire up the in-memory collaborators and fund a contributor.
//! let contributor = AccountId::from_bytes([5u8; 32]);
//! let mut env = InMemoryExternals::new();
//! env.set_role(Role::FeeSink, AccountId::from_bytes([6u8; 32]));
//! env.set_balance(AssetId::from_bytes([1u8; 32]), contributor, Amount::new(1_000_000));
//!
//! let mut pool = PoolFactory::create(config, PoolVariant::Speculation, &params, &mut env)
//!     .expect("pool created");
//!
//! // Spend 5_000 settlement on claims: 3% entry fee, then the curve.
//! let ctx = CallContext::new(contributor, Timestamp::new(100));
//! let quote = pool
//!     .swap_exact_input(
//!         Amount::new(5_000),
//!         SwapDirection::Buy,
//!         Amount::ZERO,
//!         Timestamp::new(200),
//!         &ctx,
//!         &mut env,
//!     )
//!     .expect("swap succeeded");
//!
//! assert_eq!(quote.fee(), Amount::new(150));
//! assert_eq!(quote.amount_out(), Amount::new(390_342));
//! assert_eq!(pool.accumulated_settlement(), Amount::new(4_850));
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`BasisPoints`](domain::BasisPoints), [`Timestamp`](domain::Timestamp), [`SwapQuote`](domain::SwapQuote), etc. |
//! | [`traits`] | External collaborator seams: [`SettlementLedger`](traits::SettlementLedger), [`ClaimLedger`](traits::ClaimLedger), [`AccessRegistry`](traits::AccessRegistry), [`AuditLog`](traits::AuditLog) |
//! | [`config`] | [`ProtocolParams`](config::ProtocolParams) and the per-pool [`PoolConfig`](config::PoolConfig) |
//! | [`pools`]  | [`FundingPool`](pools::FundingPool): ledger state, lifecycle operations, and the AMM engine |
//! | [`factory`] | [`PoolFactory`](factory::PoolFactory) for config-driven pool construction |
//! | [`env`]    | [`InMemoryExternals`](env::InMemoryExternals), a hash-map reference environment |
//! | [`math`]   | Checked arithmetic and the constant-product quote functions |
//! | [`error`]  | [`PoolError`](error::PoolError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod config;
pub mod domain;
pub mod env;
pub mod error;
pub mod factory;
pub mod math;
pub mod pools;
pub mod prelude;
pub mod traits;
