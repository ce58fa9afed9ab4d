use utoipa::OpenApi;

use choptop_access::{RoleScopeSummary, ScopeRow};
use choptop_core::{ErrorResponse, PaginationMeta, RowBounds};
use choptop_models::analytics::{
    AnalyticsEvent, AnalyticsSnapshot, CmsCounters, DisputeCounters, JourneyCounters,
};
use choptop_models::cms::{
    City, ContentItem, ContentPreview, ContentStatus, ContentType, CreateContentDto, Locale,
    PaginatedContentResponse, UpdateContentDto,
};
use choptop_models::journeys::{
    Channel, CreateJourneyDto, Journey, JourneyNode, JourneyNodeKind, JourneyStatus,
    JourneyTestResponse, JourneyTrigger, Segment, UpdateJourneyDto,
};
use choptop_models::payments::{
    BalanceSummary, PaginatedPaymentsResponse, PaginatedPayoutsResponse, Payment, PaymentKind,
    PaymentMethod, PaymentStatus, Payout, PayoutGroupBy, PayoutLine, PayoutMethod, PayoutStatus,
    RecordPaymentDto, SchedulePayoutDto,
};

use crate::modules::layout::controller::RowsResponse;
use crate::modules::scopes::model::{
    EffectiveScopeResponse, ScopeCatalog, SetAllScopesDto, UpdateScopesDto,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::scopes::controller::get_catalog,
        crate::modules::scopes::controller::get_role_summaries,
        crate::modules::scopes::controller::get_effective_scope,
        crate::modules::scopes::controller::update_scopes,
        crate::modules::scopes::controller::set_all_scopes,
        crate::modules::scopes::controller::get_scope_rows,
        crate::modules::layout::controller::get_rows,
        crate::modules::analytics::controller::get_analytics,
        crate::modules::analytics::controller::record_event,
        crate::modules::cms::controller::get_content,
        crate::modules::cms::controller::create_content,
        crate::modules::cms::controller::get_content_item,
        crate::modules::cms::controller::update_content,
        crate::modules::cms::controller::preview_content,
        crate::modules::cms::controller::save_draft,
        crate::modules::cms::controller::submit_for_review,
        crate::modules::cms::controller::schedule_content,
        crate::modules::cms::controller::publish_content,
        crate::modules::journeys::controller::get_journeys,
        crate::modules::journeys::controller::create_journey,
        crate::modules::journeys::controller::get_journey,
        crate::modules::journeys::controller::update_journey,
        crate::modules::journeys::controller::test_journey,
        crate::modules::journeys::controller::activate_journey,
        crate::modules::payments::controller::get_payments,
        crate::modules::payments::controller::record_payment,
        crate::modules::payments::controller::get_summary,
        crate::modules::payments::controller::get_payouts,
        crate::modules::payments::controller::schedule_payout,
    ),
    components(
        schemas(
            ErrorResponse,
            PaginationMeta,
            RowBounds,
            RowsResponse,
            ScopeCatalog,
            ScopeRow,
            RoleScopeSummary,
            EffectiveScopeResponse,
            UpdateScopesDto,
            SetAllScopesDto,
            AnalyticsEvent,
            AnalyticsSnapshot,
            CmsCounters,
            JourneyCounters,
            DisputeCounters,
            ContentItem,
            ContentType,
            ContentStatus,
            Locale,
            City,
            CreateContentDto,
            UpdateContentDto,
            PaginatedContentResponse,
            ContentPreview,
            Journey,
            JourneyNode,
            JourneyNodeKind,
            JourneyTrigger,
            JourneyStatus,
            Channel,
            Segment,
            CreateJourneyDto,
            UpdateJourneyDto,
            JourneyTestResponse,
            Payment,
            PaymentKind,
            PaymentStatus,
            PaymentMethod,
            RecordPaymentDto,
            Payout,
            PayoutMethod,
            PayoutStatus,
            PayoutGroupBy,
            PayoutLine,
            SchedulePayoutDto,
            PaginatedPaymentsResponse,
            PaginatedPayoutsResponse,
            BalanceSummary,
        )
    ),
    tags(
        (name = "Scopes", description = "Per-role, per-city permission scopes"),
        (name = "Layout", description = "Rows-per-page heuristic"),
        (name = "Analytics", description = "Console event counters"),
        (name = "CMS", description = "Content editor and publishing workflow"),
        (name = "Journeys", description = "Marketing journey builder"),
        (name = "Payments", description = "Payment ledger and balances"),
        (name = "Payouts", description = "Organizer and event payouts")
    ),
    info(
        title = "Choptop Admin API",
        version = "0.1.0",
        description = "Back office API for the Choptop ticketing console: scopes, CMS, journeys, and payments.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;
